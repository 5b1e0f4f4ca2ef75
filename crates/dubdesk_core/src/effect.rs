use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendPurge,
    SubmitForm { fields: Vec<crate::FormField> },
    StartTicker { every: Duration },
    StopTicker,
    ScheduleToastHide { generation: u64, after: Duration },
}
