use crate::modules::students::core::ports::StudentRoster;
use std::sync::Arc;

pub struct HasStudentHandler<TRoster>
where
    TRoster: StudentRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> HasStudentHandler<TRoster>
where
    TRoster: StudentRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self, name: &str) -> bool {
        self.roster.has_student(name).await
    }
}
