//! Variable and label tables
//!
//! Tiny has one variable type and a flat namespace, so the symbol table is
//! the set of names that have appeared on the left of an assignment or in
//! an INPUT statement. Labels need two sets: declarations (checked inline
//! for duplicates) and references (checked once after the full parse, so
//! forward GOTOs are legal).

use std::collections::HashSet;

/// Set of variable names that have been assigned at least once.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    assigned: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment target. Returns true if the variable is new
    /// and therefore needs a declaration in the emitted header.
    pub fn declare(&mut self, name: &str) -> bool {
        self.assigned.insert(name.to_string())
    }

    /// A variable may be read only after it has been assigned.
    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Declared and referenced jump-target labels.
#[derive(Debug, Default, Clone)]
pub struct LabelTable {
    declared: HashSet<String>,
    referenced: HashSet<String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a LABEL declaration. Returns false if the label was already
    /// declared (a duplicate-label error at the call site).
    pub fn declare(&mut self, name: &str) -> bool {
        self.declared.insert(name.to_string())
    }

    /// Record a GOTO target; validity is checked after the full parse.
    pub fn reference(&mut self, name: &str) {
        self.referenced.insert(name.to_string());
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Referenced labels that were never declared, sorted for
    /// deterministic reporting.
    pub fn undeclared_references(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .referenced
            .difference(&self.declared)
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }

    pub fn declared_count(&self) -> usize {
        self.declared.len()
    }

    pub fn referenced_count(&self) -> usize {
        self.referenced.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declaration_is_new() {
        let mut symbols = SymbolTable::new();
        assert!(symbols.declare("x"));
        assert!(!symbols.declare("x"));
        assert!(symbols.is_assigned("x"));
        assert!(!symbols.is_assigned("y"));
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn duplicate_label_declaration_is_rejected() {
        let mut labels = LabelTable::new();
        assert!(labels.declare("loop"));
        assert!(!labels.declare("loop"));
    }

    #[test]
    fn forward_references_resolve_after_declaration() {
        let mut labels = LabelTable::new();
        labels.reference("skip");
        assert_eq!(labels.undeclared_references(), vec!["skip"]);

        labels.declare("skip");
        assert!(labels.undeclared_references().is_empty());
    }

    #[test]
    fn undeclared_references_are_sorted() {
        let mut labels = LabelTable::new();
        labels.reference("zz");
        labels.reference("aa");
        labels.declare("mid");
        labels.reference("mid");
        assert_eq!(labels.undeclared_references(), vec!["aa", "zz"]);
    }
}
