use crate::modules::students::core::decider::add_student::command::AddStudent;
use crate::modules::students::core::ports::StudentRoster;
use crate::modules::students::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct AddStudentHandler<TRoster>
where
    TRoster: StudentRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> AddStudentHandler<TRoster>
where
    TRoster: StudentRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self, command: AddStudent) -> Result<(), ApplicationError> {
        self.roster
            .add_student(&command.name)
            .await
            .inspect_err(|e| info!(error = %e, "add student rejected"))?;
        Ok(())
    }
}
