//! Dubdesk client: HTTP gateway for the purge and submission endpoints.
mod gateway;
mod handle;
mod types;

pub use gateway::{ClientSettings, Gateway, ReqwestGateway};
pub use handle::ClientHandle;
pub use types::{CallError, ClientEvent};
