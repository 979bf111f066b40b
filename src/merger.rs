//! Round-robin block merger.
//!
//! The merger reads one block from every source in index order and writes a
//! single combined block:
//!
//! - the header line of source 0, verbatim
//! - the body lines of sources 0..N-1, in order
//! - one blank line
//!
//! Headers of the other sources are consumed and dropped. The merge ends
//! when source 0 runs out of blocks; remaining data in the other sources is
//! never read.

use crate::config::Options;
use crate::error::{Error, Result};
use crate::source::BlockSource;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Counters reported after a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of merged blocks written.
    pub blocks: u64,
    /// Number of body lines copied across all sources.
    pub body_lines: u64,
}

/// Merges aligned blocks from a fixed set of sources.
pub struct BlockMerger<R> {
    sources: Vec<BlockSource<R>>,
}

impl BlockMerger<BufReader<File>> {
    /// Open every source file named by `options`.
    ///
    /// Fails on the first source that cannot be opened; sources opened
    /// before it are closed when the partial set is dropped.
    pub fn open(options: &Options) -> Result<Self> {
        options.validate()?;

        let sources = (0..options.element_count)
            .map(|index| BlockSource::open(options, index))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Opened {} sources in {}", sources.len(), options.directory.display());
        Self::new(sources)
    }
}

impl<R: BufRead> BlockMerger<R> {
    /// Create a merger over already opened sources, merged in the given order.
    pub fn new(sources: Vec<BlockSource<R>>) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::invalid_argument("at least one source is required"));
        }
        Ok(Self { sources })
    }

    /// Create a merger over plain readers, labelling them by index.
    pub fn from_readers(readers: impl IntoIterator<Item = R>) -> Result<Self> {
        let sources = readers
            .into_iter()
            .enumerate()
            .map(|(index, reader)| BlockSource::new(index, format!("source {}", index), reader))
            .collect();
        Self::new(sources)
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always false; a merger holds at least one source.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Merge one block from every source into `out`.
    ///
    /// Returns the number of body lines written, or `None` once source 0 is
    /// exhausted, in which case nothing is written.
    pub fn merge_block<W: Write>(&mut self, out: &mut W) -> Result<Option<usize>> {
        let (first, rest) = self
            .sources
            .split_first_mut()
            .ok_or_else(|| Error::internal("merger has no sources"))?;

        let header = match first.read_header()? {
            Some(header) => header,
            None => return Ok(None),
        };
        out.write_all(&header)?;
        out.write_all(b"\n")?;

        let mut lines = first.copy_body(out)?;
        for source in rest {
            source.skip_header()?;
            lines += source.copy_body(out)?;
        }

        out.write_all(b"\n")?;
        Ok(Some(lines))
    }

    /// Merge every block into `out` and flush it.
    pub fn merge<W: Write>(&mut self, out: &mut W) -> Result<MergeStats> {
        let mut stats = MergeStats::default();

        while let Some(lines) = self.merge_block(out)? {
            log::debug!("Merged block {} ({} body lines)", stats.blocks, lines);
            stats.blocks += 1;
            stats.body_lines += lines as u64;
        }
        out.flush()?;

        log::info!(
            "Merged {} blocks from {} sources ({} body lines)",
            stats.blocks,
            self.sources.len(),
            stats.body_lines
        );
        Ok(stats)
    }
}

/// Open the sources named by `options` and merge them into `out`.
pub fn merge_files<W: Write>(options: &Options, out: &mut W) -> Result<MergeStats> {
    BlockMerger::open(options)?.merge(out)
}
