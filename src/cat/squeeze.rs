//! Blank-line squeezing.

use crate::stage::LineStage;

/// Run-state for blank-line squeezing, carried across all sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SqueezeState {
    enabled: bool,
    previous_was_blank: bool,
    blank_run_length: usize,
}

impl SqueezeState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    /// Decide whether a line is written, updating the run-state.
    ///
    /// Only the first blank line of a run is emitted while squeezing.
    pub fn should_emit(&mut self, is_blank: bool) -> bool {
        if !self.enabled {
            return true;
        }
        if !is_blank {
            self.previous_was_blank = false;
            self.blank_run_length = 0;
            return true;
        }
        if self.previous_was_blank {
            return false;
        }
        self.previous_was_blank = true;
        self.blank_run_length += 1;
        true
    }

    pub fn previous_was_blank(&self) -> bool {
        self.previous_was_blank
    }

    pub fn blank_run_length(&self) -> usize {
        self.blank_run_length
    }
}

/// SQUEEZE - drops blank lines that follow another blank line.
pub struct SqueezeStage {
    state: SqueezeState,
}

impl SqueezeStage {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: SqueezeState::new(enabled),
        }
    }
}

impl LineStage for SqueezeStage {
    fn process(&mut self, line: Vec<u8>) -> Vec<Vec<u8>> {
        if self.state.should_emit(line.is_empty()) {
            vec![line]
        } else {
            vec![]
        }
    }

    fn name(&self) -> &str {
        "SQUEEZE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(enabled: bool, blanks: &[bool]) -> Vec<bool> {
        let mut state = SqueezeState::new(enabled);
        blanks.iter().map(|&b| state.should_emit(b)).collect()
    }

    #[test]
    fn test_disabled_is_passthrough() {
        assert_eq!(emitted(false, &[true, true, true]), vec![true, true, true]);
    }

    #[test]
    fn test_run_collapses_to_one() {
        for k in 1..6 {
            let mut input = vec![false];
            input.extend(std::iter::repeat_n(true, k));
            input.push(false);
            let kept = emitted(true, &input).iter().filter(|&&e| e).count();
            assert_eq!(kept, 3, "run of {k} blanks");
        }
    }

    #[test]
    fn test_non_blank_resets_run() {
        let mut state = SqueezeState::new(true);
        assert!(state.should_emit(true));
        assert_eq!(state.blank_run_length(), 1);
        assert!(!state.should_emit(true));
        assert!(state.previous_was_blank());
        assert!(state.should_emit(false));
        assert!(!state.previous_was_blank());
        assert_eq!(state.blank_run_length(), 0);
        assert!(state.should_emit(true));
    }

    #[test]
    fn test_leading_blanks_squeezed() {
        assert_eq!(emitted(true, &[true, true, false]), vec![true, false, true]);
    }

    #[test]
    fn test_stage_drops_repeated_blank() {
        let mut stage = SqueezeStage::new(true);
        assert_eq!(stage.process(Vec::new()), vec![Vec::<u8>::new()]);
        assert!(stage.process(Vec::new()).is_empty());
        assert_eq!(stage.process(b"x".to_vec()), vec![b"x".to_vec()]);
    }
}
