//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer reads the document and the animator's current offset and turns
//! them into cells on the terminal.  No scrolling decisions happen here.

pub mod layout;
pub mod pager;
pub mod theme;
