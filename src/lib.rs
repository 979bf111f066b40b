//! # ygconcat - Block-aligned file concatenation
//!
//! ygconcat merges N numbered sibling files (`element0.yg`, `element1.yg`,
//! ...) that share the same block layout into one stream. Each block is a
//! header line, a body of non-blank lines and a blank footer line.
//!
//! ## Architecture
//!
//! - **Options**: element count and file naming
//! - **BlockSource**: reads one numbered input block by block
//! - **BlockMerger**: takes one block from every source in turn and writes a
//!   combined block (header of source 0, all bodies, one blank line)
//!
//! ## Example Usage
//!
//! ```rust
//! use ygconcat::BlockMerger;
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), ygconcat::Error> {
//! let first = Cursor::new(b"H1\nA\nB\n\nH2\nC\n\n".to_vec());
//! let second = Cursor::new(b"h1\nX\n\nh2\nY\nZ\n\n".to_vec());
//!
//! let mut out = Vec::new();
//! let stats = BlockMerger::from_readers([first, second])?.merge(&mut out)?;
//!
//! assert_eq!(out, b"H1\nA\nB\nX\n\nH2\nC\nY\nZ\n\n");
//! assert_eq!(stats.blocks, 2);
//! # Ok(())
//! # }
//! ```
//!
//! Reading the files from disk:
//!
//! ```rust,no_run
//! use ygconcat::{merge_files, Options};
//!
//! # fn main() -> Result<(), ygconcat::Error> {
//! let options = Options::new().element_count(3);
//! let stdout = std::io::stdout();
//! merge_files(&options, &mut stdout.lock())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod config;
pub mod error;
pub mod merger;
pub mod source;

// Re-exports
pub use config::Options;
pub use error::{Error, Result};
pub use merger::{merge_files, BlockMerger, MergeStats};
pub use source::{is_blank, BlockSource, Phase};
