use crate::state::ToastTone;

/// Projection of the controller state consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    /// `None` when the page carries no purge button at all.
    pub purge_button: Option<PurgeButtonView>,
    pub toast: Option<ToastView>,
    /// `None` until the first submission makes the panel visible.
    pub progress: Option<ProgressView>,
    /// `None` until the first submission makes the log visible.
    pub log: Option<Vec<String>>,
    /// False while a submission is in flight or after page replacement.
    pub accepts_submission: bool,
    /// Set once the server response has replaced the whole page content.
    pub completed_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeButtonView {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub tone: ToastTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: u8,
    pub label: String,
}
