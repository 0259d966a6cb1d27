//! Application orchestration: the pager document, its scroll host, state and
//! input handling.

pub mod document;
pub mod event;
pub mod handler;
pub mod host;
pub mod pacer;
pub mod state;
