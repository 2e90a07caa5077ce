// Pure decision function for enrolment.
//
// - If the name is absent, emit StudentAdded. If it is present, reject with DuplicateEntry.
// - Never perform input or output.

use crate::modules::students::core::decider::add_student::command::AddStudent;
use crate::modules::students::core::decision::{Decision, RegistryError};
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::state::RosterState;

pub fn decide_add_student(state: &RosterState, command: AddStudent) -> Decision {
    if state.contains(&command.name) {
        return Decision::Rejected {
            reason: RegistryError::DuplicateEntry(command.name),
        };
    }
    Decision::Accepted {
        events: vec![StudentEvent::StudentAdded { name: command.name }],
    }
}
