//! Stream driver: runs every named input through one shared stage chain.

use std::io::{BufRead, Write};

use super::format::FormatStage;
use super::options::CatOptions;
use super::squeeze::SqueezeStage;
use crate::error::Result;
use crate::executor::{StreamStats, execute_stream, finish};
use crate::input::{STDIN_NAME, resolve};
use crate::stage::LineStage;

/// Build the cat stage chain: squeeze first, then format.
pub fn cat_stages(options: CatOptions) -> Vec<Box<dyn LineStage>> {
    vec![
        Box::new(SqueezeStage::new(options.squeeze_blank)),
        Box::new(FormatStage::new(options)),
    ]
}

/// One cat invocation. Line numbering and squeeze state persist across
/// every source run through the same driver.
pub struct CatDriver {
    options: CatOptions,
    stages: Vec<Box<dyn LineStage>>,
    stats: StreamStats,
}

impl CatDriver {
    pub fn new(options: CatOptions) -> Self {
        Self {
            options,
            stages: cat_stages(options),
            stats: StreamStats::default(),
        }
    }

    /// Run one already-open source to the sink.
    pub fn run_source(
        &mut self,
        reader: &mut dyn BufRead,
        writer: &mut dyn Write,
    ) -> Result<StreamStats> {
        let flush_each = self.options.unbuffered;
        let stats = execute_stream(reader, writer, &mut self.stages, flush_each)?;
        self.stats += stats;
        Ok(stats)
    }

    /// Resolve and run each name in order; no names means standard input.
    ///
    /// The first source that fails to open or read aborts the whole run;
    /// output already written for earlier sources stays written.
    pub fn run_named(&mut self, names: &[String], writer: &mut dyn Write) -> Result<StreamStats> {
        let default = [STDIN_NAME.to_string()];
        let names = if names.is_empty() { &default[..] } else { names };

        for name in names {
            let mut reader = resolve(name)?;
            let stats = self
                .run_source(reader.as_mut(), writer)
                .map_err(|e| e.in_input(name))?;
            tracing::debug!(name = %name, lines = stats.lines_read, "finished input");
        }
        finish(writer, &mut self.stages)?;

        tracing::debug!(
            lines_read = self.stats.lines_read,
            lines_written = self.stats.chunks_written,
            numbered = self.options.numbers(),
            escaped = self.options.escapes(),
            "cat complete"
        );
        Ok(self.stats)
    }
}

/// Concatenate `names` to `writer` with the given options.
pub fn cat(names: &[String], options: CatOptions, writer: &mut dyn Write) -> Result<StreamStats> {
    CatDriver::new(options).run_named(names, writer)
}
