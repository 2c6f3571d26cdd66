//! # edb-scan
//!
//! C1-C7: the concurrent workspace scanner (`scanner`), the multi-language
//! parser pool (`parsers`), the deep-projection pass (`cartographer`), the
//! test-dependency graph builder (`testdeps`), and the delta-scan
//! controller (`incremental`).

#![allow(dead_code)]

pub mod cartographer;
pub mod incremental;
pub mod parsers;
pub mod scanner;
pub mod testdeps;
