/// Default byte limit for catalog and schema documents read from disk.
pub const DEFAULT_MAX_FILE_SIZE: usize = 256 * 1024;

/// Limits applied when loading a keyword catalog from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Maximum number of keywords a catalog file may define.
    pub max_keywords: usize,
    /// Maximum bytes allowed for a catalog file.
    pub max_catalog_file_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_keywords: 1024,
            max_catalog_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Controls how a schema's keywords are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// When true, members not in the catalog return `KeywordError::UnknownKeyword`.
    pub fail_on_unknown_keyword: bool,
    /// When true, every failing keyword is reported instead of only the first.
    pub collect_errors: bool,
    /// Maximum number of errors kept when collecting.
    pub max_reported_errors: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fail_on_unknown_keyword: false,
            collect_errors: false,
            max_reported_errors: 8,
        }
    }
}
