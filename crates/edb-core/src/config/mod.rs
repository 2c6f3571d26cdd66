//! Configuration types shared by the scanner, parser pool, Cartographer,
//! and test-dependency builder.

pub mod scan_config;

pub use scan_config::{CartographerConfig, ScanConfig, TestDependencyConfig};
