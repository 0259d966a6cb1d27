//! Frame-driven smooth scrolling.
//!
//! [`core::ScrollAnimator`] animates a document's scroll offset two ways:
//! eased one-shot jumps (`scroll_to`) and inertial wheel smoothing
//! (`enable_smooth_scroll` + `handle_wheel`).  The document is anything that
//! implements [`core::ScrollHost`]; the host calls `on_frame` once per refresh.
//!
//! The `app` and `ui` modules wrap the animator in a terminal pager.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
