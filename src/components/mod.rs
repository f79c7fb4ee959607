//! Province panel component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `province_sidebar` owns the panel state and picks which sub-view to show;
//! the other modules are presentational and render plain view-model data.

pub mod province_about;
pub mod province_header;
pub mod province_photos;
pub mod province_schools;
pub mod province_sidebar;
pub mod province_tabs;
