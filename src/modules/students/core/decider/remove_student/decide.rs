// Pure decision function for withdrawal.
//
// - If the name is present, emit StudentRemoved. If it is absent, reject with NotFound.
// - Never perform input or output.

use crate::modules::students::core::decider::remove_student::command::RemoveStudent;
use crate::modules::students::core::decision::{Decision, RegistryError};
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::state::RosterState;

pub fn decide_remove_student(state: &RosterState, command: RemoveStudent) -> Decision {
    if !state.contains(&command.name) {
        return Decision::Rejected {
            reason: RegistryError::NotFound(command.name),
        };
    }
    Decision::Accepted {
        events: vec![StudentEvent::StudentRemoved { name: command.name }],
    }
}
