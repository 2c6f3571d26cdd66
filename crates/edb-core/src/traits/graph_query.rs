use serde_json::Value;

/// An opaque escape hatch exposed by the core to policy code that wants to
/// ask ad-hoc questions of the projected graph without a dedicated method
/// for every query shape.
///
/// `query_type` is one of `"dependencies"`, `"symbols"`, `"callers"`, or any
/// other tag a concrete implementation chooses to support; unrecognized
/// types should return an empty/null result rather than panicking.
pub trait GraphQuery: Send + Sync {
    fn query_graph(&self, query_type: &str, params: &Value) -> Value;
}
