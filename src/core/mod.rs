//! Core algorithms: easing, interpolation, frame scheduling, target
//! resolution and the scroll animator.
//!
//! Nothing in this module depends on any TUI or rendering crate.  The
//! document is reached only through the [`host::ScrollHost`] trait.

pub mod animator;
pub mod easing;
pub mod frame;
pub mod host;
pub mod timing;

#[cfg(test)]
pub(crate) mod test_support;

pub use animator::{Driver, ScrollAnimator, ScrollOptions, WheelSmoothing};
pub use easing::Easing;
pub use host::{ScrollHost, ScrollTarget};
