use crate::modules::students::core::decider::remove_student::command::RemoveStudent;
use crate::modules::students::core::ports::StudentRoster;
use crate::modules::students::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct RemoveStudentHandler<TRoster>
where
    TRoster: StudentRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> RemoveStudentHandler<TRoster>
where
    TRoster: StudentRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self, command: RemoveStudent) -> Result<(), ApplicationError> {
        self.roster
            .remove_student(&command.name)
            .await
            .inspect_err(|e| info!(error = %e, "remove student rejected"))?;
        Ok(())
    }
}
