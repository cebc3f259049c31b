//! Line-at-a-time stage trait and the stages shared between filters.
//!
//! Each `LineStage` receives one line (without its newline) and returns
//! zero or more output chunks. This lets the executor push a single line
//! through the whole chain before reading the next one, which is what
//! keeps output interleaved with slow producers such as pipes.

/// A filter stage that processes lines one at a time.
///
/// Returning `Vec<Vec<u8>>` covers stages that drop a line (squeeze),
/// pass it through rewritten (translate, format) or emit extra output.
pub trait LineStage {
    /// Process a single input line, returning zero or more output chunks.
    fn process(&mut self, line: Vec<u8>) -> Vec<Vec<u8>>;

    /// Flush any accumulated state once all input has been processed.
    fn flush(&mut self) -> Vec<Vec<u8>> {
        vec![]
    }

    /// True once the stage will never pass another line downstream.
    ///
    /// The executor stops reading input early when any stage is done.
    fn is_done(&self) -> bool {
        false
    }

    /// The display name of this stage, used in trace logging.
    fn name(&self) -> &str;
}

/// TAKE n - keeps the first n lines, discards the rest.
pub struct TakeStage {
    n: usize,
    seen: usize,
}

impl TakeStage {
    pub fn new(n: usize) -> Self {
        Self { n, seen: 0 }
    }
}

impl LineStage for TakeStage {
    fn process(&mut self, line: Vec<u8>) -> Vec<Vec<u8>> {
        if self.seen < self.n {
            self.seen += 1;
            vec![line]
        } else {
            vec![]
        }
    }

    fn is_done(&self) -> bool {
        self.seen >= self.n
    }

    fn name(&self) -> &str {
        "TAKE"
    }
}

/// TERMINATE - appends the newline that line reading stripped.
pub struct TerminateStage;

impl LineStage for TerminateStage {
    fn process(&mut self, mut line: Vec<u8>) -> Vec<Vec<u8>> {
        line.push(b'\n');
        vec![line]
    }

    fn name(&self) -> &str {
        "TERMINATE"
    }
}
