//! Line-at-a-time executor.
//!
//! Pushes each input line through the entire stage chain and writes the
//! result before the next line is read. Stage state lives in the stages
//! themselves, so running several sources through the same chain keeps
//! counters and run-state continuous across them.

use std::io::{BufRead, Write};

use crate::error::{FilterError, Result};
use crate::input::read_line;
use crate::stage::LineStage;

/// Line totals for one run of the executor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub lines_read: usize,
    pub chunks_written: usize,
}

impl std::ops::AddAssign for StreamStats {
    fn add_assign(&mut self, rhs: Self) {
        self.lines_read += rhs.lines_read;
        self.chunks_written += rhs.chunks_written;
    }
}

/// Push lines through a slice of stages, processing each line
/// through each stage in sequence.
pub fn push_through_stages(
    lines: Vec<Vec<u8>>,
    stages: &mut [Box<dyn LineStage>],
) -> Vec<Vec<u8>> {
    let mut current = lines;
    for stage in stages.iter_mut() {
        let mut next = Vec::new();
        for line in current {
            next.extend(stage.process(line));
        }
        tracing::trace!(stage = stage.name(), out = next.len(), "stage processed");
        current = next;
    }
    current
}

fn write_chunks(writer: &mut dyn Write, chunks: &[Vec<u8>], flush_each: bool) -> Result<usize> {
    for chunk in chunks {
        writer.write_all(chunk).map_err(FilterError::Write)?;
        if flush_each {
            writer.flush().map_err(FilterError::Write)?;
        }
    }
    Ok(chunks.len())
}

/// Run every line of `reader` through `stages`, writing output as it is
/// produced.
///
/// Stops early once any stage reports it is done. Stages are not flushed
/// here; call [`finish`] after the last source.
pub fn execute_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    stages: &mut [Box<dyn LineStage>],
    flush_each: bool,
) -> Result<StreamStats> {
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();

    while !stages.iter().any(|s| s.is_done()) && read_line(reader, &mut buf)? {
        stats.lines_read += 1;
        let output = push_through_stages(vec![std::mem::take(&mut buf)], stages);
        stats.chunks_written += write_chunks(writer, &output, flush_each)?;
    }

    Ok(stats)
}

/// Flush each stage in order, pushing its output through the remaining
/// downstream stages, then flush the writer.
pub fn finish(writer: &mut dyn Write, stages: &mut [Box<dyn LineStage>]) -> Result<usize> {
    let mut written = 0;
    for i in 0..stages.len() {
        let flush_output = stages[i].flush();
        if !flush_output.is_empty() {
            let output = push_through_stages(flush_output, &mut stages[i + 1..]);
            written += write_chunks(writer, &output, false)?;
        }
    }
    writer.flush().map_err(FilterError::Write)?;
    Ok(written)
}
