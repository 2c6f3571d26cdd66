//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the file scanner subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Bounded worker concurrency. Default: 8.
    pub max_concurrency: Option<usize>,
    /// Maximum file size eligible for AST parsing, in bytes. Files over
    /// this limit still get a `file_topology` fact but are not handed to
    /// a parser. `None` means no limit.
    pub max_ast_file_bytes: Option<u64>,
    /// Extra ignore patterns (glob syntax), matched against both the path
    /// relative to the workspace root and the basename.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Force a full rescan, bypassing the `FileCache` mtime shortcut.
    pub force_full_scan: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective worker concurrency, defaulting to 8.
    pub fn effective_max_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or(8).max(1)
    }

    /// Returns the effective AST parse size ceiling, if any is configured.
    pub fn effective_max_ast_file_bytes(&self) -> Option<u64> {
        self.max_ast_file_bytes
    }

    /// Returns whether symlinks should be followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    /// Returns whether this scan should bypass the mtime cache.
    pub fn effective_force_full_scan(&self) -> bool {
        self.force_full_scan.unwrap_or(false)
    }
}

/// Configuration for the Cartographer's deep-projection pass (C5).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CartographerConfig {
    /// Version tag mixed into the deep-scan cache fingerprint. Bump this
    /// whenever the projection logic changes shape, to invalidate stale
    /// cached facts without touching file content.
    pub analyzer_version: u32,
    /// Maximum number of deep-scan cache entries held in memory.
    pub cache_capacity: u64,
    /// Whether to run the optional data-flow emitter during the deep pass.
    pub enable_dataflow: bool,
}

impl Default for CartographerConfig {
    fn default() -> Self {
        Self {
            analyzer_version: 1,
            cache_capacity: 10_000,
            enable_dataflow: false,
        }
    }
}

/// Configuration for the TestDependencyBuilder (C6).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestDependencyConfig {
    /// Hop limit used by impact queries (direct callers plus N hops).
    /// Defaults to 2; exposed so tests can exercise other depths.
    pub impact_hop_limit: Option<usize>,
}

impl TestDependencyConfig {
    pub fn effective_impact_hop_limit(&self) -> usize {
        self.impact_hop_limit.unwrap_or(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_config_defaults_match_spec() {
        let config = ScanConfig::default();
        assert_eq!(config.effective_max_concurrency(), 8);
        assert!(!config.effective_follow_symlinks());
        assert!(!config.effective_force_full_scan());
        assert_eq!(config.effective_max_ast_file_bytes(), None);
    }

    #[test]
    fn scan_config_round_trips_through_json_with_missing_fields() {
        let parsed: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.effective_max_concurrency(), 8);
    }

    #[test]
    fn zero_concurrency_is_clamped_to_one() {
        let config = ScanConfig {
            max_concurrency: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_max_concurrency(), 1);
    }
}
