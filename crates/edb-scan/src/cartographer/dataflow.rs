//! The data-flow extractor is a pluggable emitter: its internal
//! slicing algorithm is out of scope here, only the seam it plugs into.

use edb_core::facts::{CodeElement, Fact, FactArg};

/// Implemented by an optional, swappable data-flow analysis that augments
/// the Cartographer's output with `assigns`/`guards_return`/`guards_block`/
/// `uses` facts. The default emitter produces nothing; a real slicer can
/// be substituted without touching [`super::cartographer::Cartographer`].
pub trait DataFlowEmitter: Send + Sync {
    fn emit(&self, element: &CodeElement) -> Vec<Fact>;
}

/// The default emitter when no data-flow pass is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpDataFlowEmitter;

impl DataFlowEmitter for NoOpDataFlowEmitter {
    fn emit(&self, _element: &CodeElement) -> Vec<Fact> {
        Vec::new()
    }
}

/// A minimal emitter that flags guard-style early returns inside a
/// function body, as a demonstration of the seam rather than a complete
/// slicer: it looks for an `if ... { return ... }` pattern in the first
/// few lines of the body text.
#[derive(Debug, Default, Clone, Copy)]
pub struct GuardReturnDataFlowEmitter;

impl DataFlowEmitter for GuardReturnDataFlowEmitter {
    fn emit(&self, element: &CodeElement) -> Vec<Fact> {
        let Some(body) = &element.body else {
            return Vec::new();
        };
        if body.lines().take(5).any(|line| {
            let line = line.trim();
            line.starts_with("if") && line.contains("return")
        }) {
            vec![Fact::new(
                "guards_return",
                vec![FactArg::str(element.ref_id.clone())],
            )]
        } else {
            Vec::new()
        }
    }
}
