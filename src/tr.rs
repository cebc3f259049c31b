//! Translate, delete or squeeze bytes from standard input.

use std::io::{BufRead, Write};

use crate::error::{FilterError, Result};
use crate::executor::{StreamStats, execute_stream, finish};
use crate::stage::{LineStage, TerminateStage};

pub const USAGE: &str = "usage: tr string1 string2
       tr -d string1
       tr -s string1
       tr -s string1 string2
       tr -d -s string1 string2";

/// The byte rewrite applied before any squeezing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrAction {
    Translate { from: Vec<u8>, to: Vec<u8> },
    Delete { set: Vec<u8> },
    Keep,
}

/// A validated tr invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrPlan {
    pub action: TrAction,
    pub squeeze: Option<Vec<u8>>,
}

impl TrPlan {
    /// Validate flags against the operand count.
    pub fn new(delete: bool, squeeze: bool, operands: &[String]) -> Result<Self> {
        let usage = || FilterError::Usage(USAGE.to_string());
        let ops: Vec<Vec<u8>> = operands.iter().map(|s| s.as_bytes().to_vec()).collect();

        let plan = match (delete, squeeze, ops.as_slice()) {
            (false, false, [from, to]) => {
                if to.is_empty() {
                    return Err(usage());
                }
                TrPlan {
                    action: TrAction::Translate {
                        from: from.clone(),
                        to: to.clone(),
                    },
                    squeeze: None,
                }
            }
            (true, false, [set]) => TrPlan {
                action: TrAction::Delete { set: set.clone() },
                squeeze: None,
            },
            (false, true, [set]) => TrPlan {
                action: TrAction::Keep,
                squeeze: Some(set.clone()),
            },
            (false, true, [from, to]) => {
                if to.is_empty() {
                    return Err(usage());
                }
                TrPlan {
                    action: TrAction::Translate {
                        from: from.clone(),
                        to: to.clone(),
                    },
                    squeeze: Some(to.clone()),
                }
            }
            (true, true, [set, squeeze_set]) => TrPlan {
                action: TrAction::Delete { set: set.clone() },
                squeeze: Some(squeeze_set.clone()),
            },
            _ => return Err(usage()),
        };
        Ok(plan)
    }

    /// The stage chain for this plan.
    pub fn stages(&self) -> Vec<Box<dyn LineStage>> {
        let mut stages: Vec<Box<dyn LineStage>> = Vec::new();
        match &self.action {
            TrAction::Translate { from, to } => {
                stages.push(Box::new(TranslateStage::new(from, to)));
            }
            TrAction::Delete { set } => stages.push(Box::new(DeleteStage::new(set))),
            TrAction::Keep => {}
        }
        if let Some(set) = &self.squeeze {
            stages.push(Box::new(SqueezeBytesStage::new(set)));
        }
        stages.push(Box::new(TerminateStage));
        stages
    }
}

/// Membership table for a byte set.
fn byte_table(set: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    for &b in set {
        table[b as usize] = true;
    }
    table
}

/// TRANSLATE - maps bytes of `from` to the byte at the same index in `to`,
/// clamped to the last byte of `to`.
pub struct TranslateStage {
    map: [u8; 256],
}

impl TranslateStage {
    pub fn new(from: &[u8], to: &[u8]) -> Self {
        let mut map: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut mapped = [false; 256];
        for (i, &b) in from.iter().enumerate() {
            // first occurrence in `from` wins
            if mapped[b as usize] {
                continue;
            }
            mapped[b as usize] = true;
            if let Some(&last) = to.last() {
                map[b as usize] = *to.get(i).unwrap_or(&last);
            }
        }
        Self { map }
    }
}

impl LineStage for TranslateStage {
    fn process(&mut self, mut line: Vec<u8>) -> Vec<Vec<u8>> {
        for b in line.iter_mut() {
            *b = self.map[*b as usize];
        }
        vec![line]
    }

    fn name(&self) -> &str {
        "TRANSLATE"
    }
}

/// DELETE - removes every byte in the set.
pub struct DeleteStage {
    set: [bool; 256],
}

impl DeleteStage {
    pub fn new(set: &[u8]) -> Self {
        Self {
            set: byte_table(set),
        }
    }
}

impl LineStage for DeleteStage {
    fn process(&mut self, mut line: Vec<u8>) -> Vec<Vec<u8>> {
        line.retain(|&b| !self.set[b as usize]);
        vec![line]
    }

    fn name(&self) -> &str {
        "DELETE"
    }
}

/// SQUEEZE - collapses runs of one repeated byte from the set.
pub struct SqueezeBytesStage {
    set: [bool; 256],
}

impl SqueezeBytesStage {
    pub fn new(set: &[u8]) -> Self {
        Self {
            set: byte_table(set),
        }
    }
}

impl LineStage for SqueezeBytesStage {
    fn process(&mut self, mut line: Vec<u8>) -> Vec<Vec<u8>> {
        let set = &self.set;
        line.dedup_by(|b, prev| b == prev && set[*b as usize]);
        vec![line]
    }

    fn name(&self) -> &str {
        "SQUEEZE"
    }
}

/// Run `plan` over every line of `reader`, flushing after each line when
/// `unbuffered` is set.
pub fn tr(
    plan: &TrPlan,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    unbuffered: bool,
) -> Result<StreamStats> {
    let mut stages = plan.stages();
    let stats = execute_stream(reader, writer, &mut stages, unbuffered)
        .map_err(|e| e.in_input("stdin"))?;
    finish(writer, &mut stages)?;
    tracing::debug!(lines = stats.lines_read, "tr complete");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    fn ops(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn run(delete: bool, squeeze: bool, args: &[&str], input: &str) -> String {
        let plan = TrPlan::new(delete, squeeze, &ops(args)).unwrap();
        let mut out = Vec::new();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        tr(&plan, &mut reader, &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_translate() {
        assert_eq!(
            run(false, false, &["abc", "xyz"], "aabbcc d\n"),
            "xxyyzz d\n"
        );
    }

    #[test]
    fn test_translate_short_target_clamps() {
        assert_eq!(run(false, false, &["abc", "x"], "abcd\n"), "xxxd\n");
    }

    #[test]
    fn test_translate_first_occurrence_wins() {
        assert_eq!(run(false, false, &["aa", "xy"], "a\n"), "x\n");
    }

    #[test]
    fn test_delete() {
        assert_eq!(run(true, false, &["lo"], "hello world\n"), "he wrd\n");
    }

    #[test]
    fn test_squeeze() {
        assert_eq!(
            run(false, true, &["l "], "hello    world\n"),
            "helo world\n"
        );
    }

    #[test]
    fn test_squeeze_only_same_byte_runs() {
        assert_eq!(run(false, true, &["ab"], "aabbab\n"), "abab\n");
    }

    #[test]
    fn test_delete_then_squeeze() {
        assert_eq!(run(true, true, &["x", "o"], "fxoxoxo bar\n"), "fo bar\n");
    }

    #[test]
    fn test_translate_then_squeeze() {
        assert_eq!(run(false, true, &["ab", "zz"], "aabbc\n"), "zc\n");
    }

    #[test]
    fn test_every_line_is_terminated() {
        assert_eq!(run(true, false, &["x"], "ax\nbx"), "a\nb\n");
    }

    #[test]
    fn test_operand_count_validation() {
        assert!(TrPlan::new(false, false, &ops(&["a"])).is_err());
        assert!(TrPlan::new(true, false, &ops(&["a", "b"])).is_err());
        assert!(TrPlan::new(true, true, &ops(&["a"])).is_err());
        assert!(TrPlan::new(false, false, &ops(&["a", ""])).is_err());
        assert!(TrPlan::new(false, false, &[]).is_err());
    }

    #[test]
    fn test_plan_stage_names() {
        let plan = TrPlan::new(true, true, &ops(&["a", "b"])).unwrap();
        let names: Vec<String> = plan
            .stages()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["DELETE", "SQUEEZE", "TERMINATE"]);
    }

    #[test]
    fn test_read_failure_names_stdin() {
        let plan = TrPlan::new(true, false, &ops(&["x"])).unwrap();
        let mut reader = BufReader::new(FailingReader);
        let mut out = Vec::new();
        let err = tr(&plan, &mut reader, &mut out, false).unwrap_err();
        assert!(matches!(err, FilterError::Read { .. }));
        assert_eq!(err.to_string(), "stdin: device gone");
        assert!(out.is_empty());
    }
}
