//! Hasher aliases used wherever map/set performance matters more than
//! DoS-resistance (internal fact/symbol tables, never attacker-controlled
//! keys from outside the process).

use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

pub type FxHashMap<K, V> = std::collections::HashMap<K, V, BuildHasherDefault<FxHasher>>;
pub type FxHashSet<T> = std::collections::HashSet<T, BuildHasherDefault<FxHasher>>;
