// Command data type for enrolling a student.
//
// Carries the name exactly as the caller supplied it. No trimming or case folding.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudent {
    pub name: String,
}

impl AddStudent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
