//! Panel configuration: catalog location, placeholder art, layout breakpoint.
//!
//! Provided through Leptos context by the host app. Components that find no
//! config in context fall back to [`PanelConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::{ProvinceRecord, ProvinceStats};

pub const DEFAULT_CATALOG_PATH: &str = "/data/provincesData.json";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1544735716-392fe2489ffa";
pub const DEFAULT_NARROW_BREAKPOINT_PX: u32 = 768;
pub const MISSING_DESCRIPTION: &str = "Information not available";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Path of the static catalog document, fetched with a plain GET.
    pub catalog_path: String,
    /// Single gallery image used when a province has no catalog entry.
    pub placeholder_image: String,
    /// Viewports narrower than this many CSS pixels use the bottom-sheet layout.
    pub narrow_breakpoint_px: u32,
}

impl Default for PanelConfig {
    /// Built-in defaults, with `PROVINCE_CATALOG_PATH` honoured at compile time.
    fn default() -> Self {
        Self {
            catalog_path: catalog_path_or_default(option_env!("PROVINCE_CATALOG_PATH")),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
        }
    }
}

impl PanelConfig {
    /// Record substituted when the catalog has no entry for a province.
    #[must_use]
    pub fn default_record(&self) -> ProvinceRecord {
        ProvinceRecord {
            description: MISSING_DESCRIPTION.to_owned(),
            province_image: String::new(),
            images: vec![self.placeholder_image.clone()],
            schools: Vec::new(),
            volunteers: Vec::new(),
            stats: ProvinceStats { districts: 0, students: 0 },
        }
    }
}

fn catalog_path_or_default(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if !path.is_empty() => path.to_owned(),
        _ => DEFAULT_CATALOG_PATH.to_owned(),
    }
}
