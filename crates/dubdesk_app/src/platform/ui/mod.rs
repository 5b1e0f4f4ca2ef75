//! Console presentation of the controller view-model.

pub mod constants;
pub mod render;
