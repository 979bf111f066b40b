//! Configuration options for a merge run.

use std::path::PathBuf;

/// Default file name prefix for numbered sources.
pub const DEFAULT_PREFIX: &str = "element";

/// Default file name suffix for numbered sources.
pub const DEFAULT_SUFFIX: &str = ".yg";

/// Configuration options for opening the sources of a merge.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of numbered sources to merge.
    /// Default: 1
    pub element_count: usize,

    /// Directory the source files are resolved against.
    /// Default: the working directory
    pub directory: PathBuf,

    /// File name prefix placed before the source index.
    /// Default: "element"
    pub prefix: String,

    /// File name suffix placed after the source index.
    /// Default: ".yg"
    pub suffix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            element_count: 1,
            directory: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of sources.
    pub fn element_count(mut self, count: usize) -> Self {
        self.element_count = count;
        self
    }

    /// Sets the directory holding the source files.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = dir.into();
        self
    }

    /// Sets the file name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the file name suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Path of the source with the given index, e.g. `./element3.yg`.
    pub fn source_path(&self, index: usize) -> PathBuf {
        self.directory.join(format!("{}{}{}", self.prefix, index, self.suffix))
    }

    /// Validates the options and returns an error if any are invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.element_count == 0 {
            return Err(crate::Error::invalid_argument("element count must be > 0"));
        }
        if self.prefix.is_empty() {
            return Err(crate::Error::invalid_argument("file name prefix must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.element_count, 1);
        assert_eq!(opts.directory, PathBuf::from("."));
        assert_eq!(opts.prefix, "element");
        assert_eq!(opts.suffix, ".yg");
    }

    #[test]
    fn test_options_builder() {
        let opts = Options::new().element_count(4).directory("/data").prefix("part").suffix(".txt");

        assert_eq!(opts.element_count, 4);
        assert_eq!(opts.source_path(2), Path::new("/data/part2.txt"));
    }

    #[test]
    fn test_source_path_naming() {
        let opts = Options::default();
        assert_eq!(opts.source_path(0), Path::new("./element0.yg"));
        assert_eq!(opts.source_path(12), Path::new("./element12.yg"));
    }

    #[test]
    fn test_options_validation() {
        let mut opts = Options::default();
        assert!(opts.validate().is_ok());

        opts.element_count = 0;
        assert!(opts.validate().is_err());

        opts.element_count = 3;
        opts.prefix.clear();
        assert!(opts.validate().is_err());
    }
}
