//! Per-snippet execution scope.
//!
//! A scope is an explicit name-to-reducer mapping with a closed permitted
//! set: a snippet can only reach the bindings its author listed, and
//! referencing anything else fails by name. There is no ambient environment
//! to fall back on.

use std::collections::BTreeMap;

use crate::reducers::ReducerKind;

/// The bindings one snippet may reference.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: BTreeMap<String, ReducerKind>,
}

impl Scope {
    /// Every built-in reducer under its canonical name. Catalog snippets
    /// narrow this to the names they declare via [`Scope::closed`].
    pub fn standard() -> Self {
        let mut scope = Scope::default();
        for kind in [
            ReducerKind::Counter,
            ReducerKind::Todos,
            ReducerKind::Toggle,
            ReducerKind::Visibility,
        ] {
            scope.bindings.insert(kind.name().to_string(), kind);
        }
        scope
    }

    /// Only the named subset of the standard bindings. Names that match no
    /// built-in are skipped, so a snippet declaring one simply fails with
    /// an undefined-name error when it tries to use it.
    pub fn closed<S: AsRef<str>>(names: &[S]) -> Self {
        let mut scope = Scope::default();
        for name in names {
            if let Some(kind) = ReducerKind::from_name(name.as_ref()) {
                scope.bindings.insert(name.as_ref().to_string(), kind);
            }
        }
        scope
    }

    pub fn get(&self, name: &str) -> Option<ReducerKind> {
        self.bindings.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_scope_narrows_the_standard_set() {
        let scope = Scope::closed(&["counter"]);
        assert!(scope.get("counter").is_some());
        assert!(scope.get("todos").is_none());
    }

    #[test]
    fn unknown_names_are_skipped_not_invented() {
        let scope = Scope::closed(&["counter", "blockchain"]);
        assert!(scope.get("blockchain").is_none());
        assert_eq!(scope.names().count(), 1);
    }
}
