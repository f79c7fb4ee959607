//! Panel composition: resolved record + active tab + layout into one view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PanelComposer` owns the resolver and tab state for one mounted panel. The
//! host feeds it the current province and open flag on every render; it hands
//! back a [`ViewModel`] plus, when the province just changed, a
//! [`ResolveTicket`] the host must fetch for and pass to `complete`.
//!
//! The view model is `Loading` unless the resolver holds a record for exactly
//! the province being rendered. Pending, failed, and not-yet-synced states all
//! look the same to the user.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::api::FetchError;
use crate::net::types::{ProvinceRecord, ProvinceStats, SchoolInfo, VolunteerInfo};
use crate::state::resolver::{Completion, ResolveTicket, ResolverState};
use crate::state::ui::{PanelState, Tab, TabController};
use crate::state::visibility::{PanelClasses, compute_classes};
use crate::util::viewport::ViewportClassifier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub province: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsView {
    pub active: Tab,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutContent {
    pub image: String,
    pub description: String,
    pub volunteers: Vec<VolunteerInfo>,
    pub stats: ProvinceStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolsContent {
    pub schools: Vec<SchoolInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotosContent {
    pub images: Vec<String>,
}

/// The one content slice shown under the tab strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabContent {
    About(AboutContent),
    Schools(SchoolsContent),
    Photos(PhotosContent),
}

impl TabContent {
    /// Slice `record` for `tab`.
    pub fn for_tab(tab: Tab, record: &ProvinceRecord) -> Self {
        match tab {
            Tab::About => Self::About(AboutContent {
                image: record.province_image.clone(),
                description: record.description.clone(),
                volunteers: record.volunteers.clone(),
                stats: record.stats,
            }),
            Tab::Schools => Self::Schools(SchoolsContent { schools: record.schools.clone() }),
            Tab::Photos => Self::Photos(PhotosContent { images: record.images.clone() }),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Self::About(_) => Tab::About,
            Self::Schools(_) => Tab::Schools,
            Self::Photos(_) => Tab::Photos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub header: HeaderView,
    pub tabs: TabsView,
    pub content: TabContent,
    pub visibility: PanelClasses,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewModel {
    Loading,
    Ready(PanelView),
}

impl ViewModel {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn panel(&self) -> Option<&PanelView> {
        match self {
            Self::Ready(panel) => Some(panel),
            Self::Loading => None,
        }
    }
}

/// Output of one [`PanelComposer::render`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub view_model: ViewModel,
    /// Fetch the host must start, present only when the province changed.
    pub request: Option<ResolveTicket>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelComposer {
    resolver: ResolverState,
    tabs: TabController,
}

impl PanelComposer {
    pub fn resolver(&self) -> &ResolverState {
        &self.resolver
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    /// Switch tabs. Never triggers a fetch; survives province changes.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.select(tab);
    }

    /// Note the current province; returns a ticket only on a change.
    fn sync_province(&mut self, province: &str) -> Option<ResolveTicket> {
        self.resolver.begin(province)
    }

    /// Re-request the current province after a failure.
    pub fn retry(&mut self) -> Option<ResolveTicket> {
        self.resolver.retry()
    }

    pub fn complete(&mut self, ticket: &ResolveTicket, outcome: Result<ProvinceRecord, FetchError>) -> Completion {
        self.resolver.complete(ticket, outcome)
    }

    /// Sync the province, then build the view model for the given inputs.
    pub fn render<V>(&mut self, province: &str, is_open: bool, viewport: &V) -> Rendered
    where
        V: ViewportClassifier + ?Sized,
    {
        let request = self.sync_province(province);
        let view_model = self.view_model(province, is_open, viewport.is_narrow());
        Rendered { view_model, request }
    }

    /// Build the view model without touching resolver state.
    fn view_model(&self, province: &str, is_open: bool, is_narrow: bool) -> ViewModel {
        if self.resolver.key() != Some(province) {
            return ViewModel::Loading;
        }
        let Some(record) = self.resolver.resolution().record() else {
            return ViewModel::Loading;
        };
        let state = self.panel_state(is_open, is_narrow);
        ViewModel::Ready(PanelView {
            header: HeaderView { province: province.to_owned() },
            tabs: TabsView { active: state.active_tab },
            content: TabContent::for_tab(state.active_tab, record),
            visibility: compute_classes(state.is_open, state.is_narrow_viewport),
        })
    }

    pub fn panel_state(&self, is_open: bool, is_narrow: bool) -> PanelState {
        PanelState { is_open, is_narrow_viewport: is_narrow, active_tab: self.tabs.active() }
    }
}
