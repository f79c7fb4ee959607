//! Local panel chrome state (active tab, layout inputs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns apart from resolved catalog data so
//! switching tabs never touches the fetch path.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Content tabs of the province panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    About,
    Schools,
    Photos,
}

impl Tab {
    /// Display order in the tab strip.
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Schools, Tab::Photos];

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Schools => "Schools",
            Self::Photos => "Photos",
        }
    }

    /// Stable lowercase identifier, used for DOM ids and test hooks.
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Schools => "schools",
            Self::Photos => "photos",
        }
    }
}

/// Which tab is showing. Starts on About; every selection is unconditional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn active(self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }
}

/// Snapshot of the inputs that shape one render of the panel.
///
/// `is_open` belongs to the host and is copied in, never written back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub is_open: bool,
    pub is_narrow_viewport: bool,
    pub active_tab: Tab,
}
