//! Collision-free identifier synthesis.
//!
//! TypeScript requires names where Flow lets them be omitted (function-type
//! parameters, index signature keys). A `NameSet` holds the names already in
//! use in the scope being translated and hands out fresh ones.

use rustc_hash::FxHashSet;

/// Names in use within one scope (a function type's parameter list, or one
/// object type's members).
#[derive(Clone, Debug, Default)]
pub struct NameSet {
    used: FxHashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        NameSet {
            used: FxHashSet::default(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameSet {
            used: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark `name` as used. Returns false if it already was.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.used.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Return a name not yet in the set and add it.
    ///
    /// Tries `base` first, then `base1`, `base2`, ... so the result only
    /// depends on the names already present.
    pub fn fresh(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut suffix: u32 = 1;
        loop {
            let candidate = format!("{base}{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/names.rs"]
mod tests;
