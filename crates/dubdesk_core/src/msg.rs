#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the purge control.
    PurgeClicked,
    /// The purge call settled.
    PurgeSettled { result: crate::CallResult },
    /// User submitted the job form with its current field values.
    FormSubmitted { fields: Vec<crate::FormField> },
    /// One simulated-progress interval elapsed.
    ProgressTick,
    /// The submission call settled.
    SubmitSettled { result: crate::CallResult },
    /// A scheduled toast-hide deadline fired.
    ToastDeadline { generation: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}
