//! Panel state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`resolver`, `ui`, `visibility`) and joined in
//! `panel`, so each piece can be driven and tested without a browser.

pub mod panel;
pub mod resolver;
pub mod ui;
pub mod visibility;
