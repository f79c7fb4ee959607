//! Layout and slide classes for the panel container.
//!
//! Pure mapping from `(is_open, is_narrow)` to utility classes. Narrow
//! viewports get a bottom sheet that slides down to hide; wide viewports get a
//! left drawer that slides left. The CSS transition does the animation.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

pub const PANEL_BASE_CLASS: &str = "fixed transition-transform duration-300 ease-in-out z-50 bg-gray-900 shadow-lg";
pub const CONTENT_BASE_CLASS: &str = "p-4 overflow-y-auto text-gray-300";

pub const BOTTOM_SHEET_CLASS: &str = "bottom-0 left-0 right-0 h-[50vh] border-t border-[#2DD4BF]/20 rounded-t-xl";
pub const SIDE_DRAWER_CLASS: &str = "top-0 left-0 h-full w-[450px] border-r border-[#2DD4BF]/20";

pub const SHEET_SETTLED_CLASS: &str = "translate-y-0";
pub const SHEET_HIDDEN_CLASS: &str = "translate-y-full";
pub const DRAWER_SETTLED_CLASS: &str = "translate-x-0";
pub const DRAWER_HIDDEN_CLASS: &str = "-translate-x-full";

pub const SHEET_CONTENT_HEIGHT_CLASS: &str = "max-h-[calc(45vh-120px)]";
pub const DRAWER_CONTENT_HEIGHT_CLASS: &str = "max-h-[calc(100vh-120px)]";

/// Panel orientation derived from the viewport classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelLayout {
    /// Bottom-anchored, full width, half the viewport tall.
    BottomSheet,
    /// Left-anchored, fixed width, full height.
    SideDrawer,
}

impl PanelLayout {
    pub fn for_viewport(is_narrow: bool) -> Self {
        if is_narrow { Self::BottomSheet } else { Self::SideDrawer }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelClasses {
    pub layout: PanelLayout,
    pub position_class: &'static str,
    pub transform_class: &'static str,
    /// Max-height for the scrolling content region under header and tabs.
    pub content_height_class: &'static str,
}

impl PanelClasses {
    /// Full class list for the panel's outer element.
    pub fn container_class(&self) -> String {
        format!("{PANEL_BASE_CLASS} {} {}", self.position_class, self.transform_class)
    }

    /// Full class list for the scrolling content region.
    pub fn content_class(&self) -> String {
        format!("{CONTENT_BASE_CLASS} {}", self.content_height_class)
    }

    /// True when the transform puts the panel on screen.
    pub fn is_settled(&self) -> bool {
        matches!(self.transform_class, SHEET_SETTLED_CLASS | DRAWER_SETTLED_CLASS)
    }
}

pub fn compute_classes(is_open: bool, is_narrow: bool) -> PanelClasses {
    match PanelLayout::for_viewport(is_narrow) {
        PanelLayout::BottomSheet => PanelClasses {
            layout: PanelLayout::BottomSheet,
            position_class: BOTTOM_SHEET_CLASS,
            transform_class: if is_open { SHEET_SETTLED_CLASS } else { SHEET_HIDDEN_CLASS },
            content_height_class: SHEET_CONTENT_HEIGHT_CLASS,
        },
        PanelLayout::SideDrawer => PanelClasses {
            layout: PanelLayout::SideDrawer,
            position_class: SIDE_DRAWER_CLASS,
            transform_class: if is_open { DRAWER_SETTLED_CLASS } else { DRAWER_HIDDEN_CLASS },
            content_height_class: DRAWER_CONTENT_HEIGHT_CLASS,
        },
    }
}
