#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveStudent {
    pub name: String,
}

impl RemoveStudent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
