//! Numbered block sources.
//!
//! A source is a line-oriented text stream made of blocks:
//!
//! ```text
//! header line
//! body line
//! body line
//! <blank line>
//! ```
//!
//! [`BlockSource`] reads one block at a time in three steps (header, body,
//! footer) and tracks which step it is in so the merger cannot take them
//! out of order.

use crate::config::Options;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Where a source is within the current block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The next line is a block header.
    Header,
    /// The header was consumed; body lines follow up to a blank line.
    Body,
    /// End of source was reached where a header was expected.
    Exhausted,
}

/// Returns true if the line is empty after trimming whitespace.
///
/// Every byte at or below `0x20` (space and the ASCII control range) counts
/// as whitespace.
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| b <= b' ')
}

/// One numbered input read block by block.
pub struct BlockSource<R> {
    /// Position of this source in the merge order
    index: usize,
    /// Human readable name used in diagnostics (usually the file path)
    label: String,
    reader: R,
    /// Current line, without its terminator
    line: Vec<u8>,
    phase: Phase,
    /// Blocks fully consumed so far
    block: u64,
    /// Bytes consumed so far
    position: u64,
}

impl BlockSource<BufReader<File>> {
    /// Open source `index` as named by `options`.
    pub fn open(options: &Options, index: usize) -> Result<Self> {
        let path = options.source_path(index);
        let file = File::open(&path).map_err(|source| Error::Open { path: path.clone(), source })?;
        log::debug!("Opened source {} at {}", index, path.display());

        Ok(Self::new(index, path.display().to_string(), BufReader::new(file)))
    }
}

impl<R: BufRead> BlockSource<R> {
    /// Wrap an already opened reader.
    pub fn new(index: usize, label: impl Into<String>, reader: R) -> Self {
        Self {
            index,
            label: label.into(),
            reader,
            line: Vec::new(),
            phase: Phase::Header,
            block: 0,
            position: 0,
        }
    }

    /// Index of this source.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Diagnostic name of this source.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current phase within the block.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of blocks fully consumed.
    pub fn blocks_read(&self) -> u64 {
        self.block
    }

    /// Number of bytes consumed.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read the header of the next block.
    ///
    /// Returns `None` at end of source, after which the source stays
    /// exhausted.
    pub fn read_header(&mut self) -> Result<Option<Vec<u8>>> {
        if self.phase == Phase::Exhausted {
            return Ok(None);
        }
        self.expect_phase(Phase::Header)?;

        if !self.next_line()? {
            self.phase = Phase::Exhausted;
            return Ok(None);
        }

        self.phase = Phase::Body;
        Ok(Some(std::mem::take(&mut self.line)))
    }

    /// Consume the header of the next block without returning it.
    ///
    /// Only the first source's header is emitted, so the others are skipped.
    /// A missing header means this source has fewer blocks than the first.
    pub fn skip_header(&mut self) -> Result<()> {
        self.expect_phase(Phase::Header)?;

        if !self.next_line()? {
            self.phase = Phase::Exhausted;
            return Err(self.malformed("end of source where a block header was expected"));
        }

        self.phase = Phase::Body;
        Ok(())
    }

    /// Copy the body of the current block to `out`, one line per `\n`.
    ///
    /// Stops at the first blank line, which is consumed but not written.
    /// Returns the number of body lines copied.
    pub fn copy_body<W: Write>(&mut self, out: &mut W) -> Result<usize> {
        self.expect_phase(Phase::Body)?;

        let mut copied = 0;
        loop {
            if !self.next_line()? {
                return Err(self.malformed("end of source before the blank line ending the block"));
            }
            if is_blank(&self.line) {
                break;
            }
            out.write_all(&self.line)?;
            out.write_all(b"\n")?;
            copied += 1;
        }

        self.phase = Phase::Header;
        self.block += 1;
        Ok(copied)
    }

    /// Read one line into `self.line`. A line ends at `\n`, `\r` or `\r\n`;
    /// the terminator is not kept. Returns false at end of source.
    fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        let mut read = 0;

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            };
            if buf.is_empty() {
                self.position += read as u64;
                return Ok(read > 0);
            }

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let carriage_return = buf[i] == b'\r';
                    self.line.extend_from_slice(&buf[..i]);
                    self.reader.consume(i + 1);
                    read += i + 1;

                    if carriage_return && self.reader.fill_buf()?.first() == Some(&b'\n') {
                        self.reader.consume(1);
                        read += 1;
                    }

                    self.position += read as u64;
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    self.line.extend_from_slice(buf);
                    self.reader.consume(len);
                    read += len;
                }
            }
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(Error::internal(format!(
                "source {} ({}) is in phase {:?}, expected {:?}",
                self.index, self.label, self.phase, expected
            )));
        }
        Ok(())
    }

    fn malformed(&self, reason: &str) -> Error {
        Error::malformed(self.index, self.block, format!("{}: {}", self.label, reason))
    }
}
