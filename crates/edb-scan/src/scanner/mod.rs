//! FileCache (C1), LanguageDetector (C2), and the concurrent Scanner (C4).

pub mod file_cache;
pub mod language_detect;
pub mod scanner;
pub mod types;
pub mod walker;

pub use file_cache::FileCache;
pub use language_detect::{is_test_file, Language};
pub use scanner::Scanner;
pub use types::{CacheStatus, CachedFileMetadata, DirResult, DiscoveredFile, FileResult, ScanResult, ScanStats};
pub use walker::Walker;
