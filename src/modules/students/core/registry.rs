// The student registry: a set of enrolled names with uniqueness enforced on add
// and existence enforced on remove.
//
// Every mutation runs the matching decider against the current state and only
// folds the resulting events in when the decision is accepted. A rejected
// decision leaves the state untouched.
//
// Single-threaded. Wrap it in `InMemoryStudentRoster` for shared access.

use crate::modules::students::core::decider::add_student::command::AddStudent;
use crate::modules::students::core::decider::add_student::decide::decide_add_student;
use crate::modules::students::core::decider::remove_student::command::RemoveStudent;
use crate::modules::students::core::decider::remove_student::decide::decide_remove_student;
use crate::modules::students::core::decision::{Decision, RegistryError};
use crate::modules::students::core::evolve::evolve;
use crate::modules::students::core::state::RosterState;
use tracing::debug;

#[derive(Debug, Default)]
pub struct StudentRegistry {
    state: RosterState,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrol `name`. Fails with [`RegistryError::DuplicateEntry`] if it is already enrolled.
    pub fn add_student(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        let decision = decide_add_student(&self.state, AddStudent::new(name));
        self.apply(decision)
    }

    /// Withdraw `name`. Fails with [`RegistryError::NotFound`] if it is not enrolled.
    pub fn remove_student(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        let decision = decide_remove_student(&self.state, RemoveStudent::new(name));
        self.apply(decision)
    }

    pub fn has_student(&self, name: &str) -> bool {
        self.state.contains(name)
    }

    fn apply(&mut self, decision: Decision) -> Result<(), RegistryError> {
        match decision {
            Decision::Accepted { events } => {
                for event in events {
                    debug!(?event, "applying student event");
                    self.state = evolve(std::mem::take(&mut self.state), event);
                }
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason),
        }
    }
}
