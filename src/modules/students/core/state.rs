use std::collections::HashSet;

/// Names currently enrolled. Compared byte-for-byte, never normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    students: HashSet<String>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.students.contains(name)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String) -> bool {
        self.students.insert(name)
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        self.students.remove(name)
    }
}
