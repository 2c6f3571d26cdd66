use serde::{Deserialize, Serialize};

/// A single argument to a [`Fact`]. Atoms are symbolic constants (written
/// with a leading `/` by convention, e.g. `/public`, `/function`) and are
/// distinct from plain strings: two atoms with the same name are always
/// the same value, while two string args are compared by content only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FactArg {
    Str(String),
    Atom(String),
    Int(i64),
    Bool(bool),
}

impl FactArg {
    pub fn atom(name: impl Into<String>) -> Self {
        FactArg::Atom(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        FactArg::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FactArg::Str(s) | FactArg::Atom(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// An ordinary Datalog-style extensional fact: a predicate name plus an
/// ordered argument tuple. Every fact emitted by the scanner, parser pool,
/// Cartographer, or test-dependency builder is one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub predicate: String,
    pub args: Vec<FactArg>,
}

impl Fact {
    pub fn new(predicate: impl Into<String>, args: Vec<FactArg>) -> Self {
        Self {
            predicate: predicate.into(),
            args,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_and_string_args_are_distinct() {
        let atom = FactArg::atom("public");
        let string = FactArg::str("public");
        assert_ne!(atom, string);
    }

    #[test]
    fn fact_equality_is_structural() {
        let a = Fact::new("directory", vec![FactArg::str("/a"), FactArg::str("a")]);
        let b = Fact::new("directory", vec![FactArg::str("/a"), FactArg::str("a")]);
        assert_eq!(a, b);
        assert_eq!(a.arity(), 2);
    }

    #[test]
    fn facts_are_hashable_for_set_dedup() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Fact::new("code_calls", vec![FactArg::str("a"), FactArg::str("b")]));
        set.insert(Fact::new("code_calls", vec![FactArg::str("a"), FactArg::str("b")]));
        assert_eq!(set.len(), 1);
    }
}
