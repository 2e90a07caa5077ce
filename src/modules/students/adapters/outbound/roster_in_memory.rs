use crate::modules::students::core::decision::RegistryError;
use crate::modules::students::core::ports::StudentRoster;
use crate::modules::students::core::registry::StudentRegistry;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// One registry behind one lock. Every operation holds the lock for its full
/// check-then-act, so concurrent callers cannot both pass the same check.
#[derive(Debug, Default)]
pub struct InMemoryStudentRoster {
    registry: Mutex<StudentRegistry>,
}

impl InMemoryStudentRoster {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRoster for InMemoryStudentRoster {
    async fn add_student(&self, name: &str) -> Result<(), RegistryError> {
        self.registry.lock().await.add_student(name)
    }

    async fn remove_student(&self, name: &str) -> Result<(), RegistryError> {
        self.registry.lock().await.remove_student(name)
    }

    async fn has_student(&self, name: &str) -> bool {
        self.registry.lock().await.has_student(name)
    }
}
