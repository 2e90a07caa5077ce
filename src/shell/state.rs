use crate::modules::students::adapters::outbound::roster_in_memory::InMemoryStudentRoster;
use crate::modules::students::use_cases::add_student::handler::AddStudentHandler;
use crate::modules::students::use_cases::has_student::handler::HasStudentHandler;
use crate::modules::students::use_cases::remove_student::handler::RemoveStudentHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_handler: Arc<AddStudentHandler<InMemoryStudentRoster>>,
    pub remove_handler: Arc<RemoveStudentHandler<InMemoryStudentRoster>>,
    pub has_handler: Arc<HasStudentHandler<InMemoryStudentRoster>>,
}

impl AppState {
    /// Wire all three handlers to one roster.
    pub fn new(roster: Arc<InMemoryStudentRoster>) -> Self {
        Self {
            add_handler: Arc::new(AddStudentHandler::new(roster.clone())),
            remove_handler: Arc::new(RemoveStudentHandler::new(roster.clone())),
            has_handler: Arc::new(HasStudentHandler::new(roster)),
        }
    }
}
