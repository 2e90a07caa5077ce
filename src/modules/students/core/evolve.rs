use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::state::RosterState;

pub fn evolve(mut state: RosterState, event: StudentEvent) -> RosterState {
    match event {
        StudentEvent::StudentAdded { name } => {
            state.insert(name);
        }
        StudentEvent::StudentRemoved { name } => {
            state.remove(&name);
        }
    }
    state
}
