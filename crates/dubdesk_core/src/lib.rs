//! Dubdesk core: pure controller state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, CallResult, FormField, PageChrome, ProgressStep, ToastTone, DONE_LABEL, ERROR_LABEL,
    PROGRESS_STEPS, PURGE_ERROR_PREFIX, START_LABEL, TICK_INTERVAL, TOAST_HIDE_DELAY,
};
pub use update::update;
pub use view_model::{AppViewModel, ProgressView, PurgeButtonView, ToastView};
