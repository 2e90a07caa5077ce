use crate::modules::students::core::events::StudentEvent;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("student already exists: {0}")]
    DuplicateEntry(String),

    #[error("student does not exist: {0}")]
    NotFound(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<StudentEvent> },
    Rejected { reason: RegistryError },
}
