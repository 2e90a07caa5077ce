// Ports define what the use cases need from a roster, without implementing it.
//
// Boundaries
// - Implementations must make each check-then-act atomic with respect to other callers.
// - The in memory adapter lives in adapters/outbound.

use crate::modules::students::core::decision::RegistryError;
use async_trait::async_trait;

#[async_trait]
pub trait StudentRoster: Send + Sync {
    async fn add_student(&self, name: &str) -> Result<(), RegistryError>;
    async fn remove_student(&self, name: &str) -> Result<(), RegistryError>;
    async fn has_student(&self, name: &str) -> bool;
}
