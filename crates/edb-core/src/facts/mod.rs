//! The fact/element data model shared by every producer (scanner, parser
//! pool, Cartographer, test-dependency builder) and every consumer (the
//! external Kernel).

pub mod element;
pub mod fact;

pub use element::{CodeElement, ElementType, Visibility};
pub use fact::{Fact, FactArg};
