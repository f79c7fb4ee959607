//! Province sidebar: the composed panel with header, tabs, and tab content.
//!
//! ARCHITECTURE
//! ============
//! One `PanelComposer` per mounted sidebar lives in a local signal. A single
//! effect feeds the inputs (province, open flag, viewport) through
//! `PanelComposer::render`, publishes the resulting view model, and starts a
//! fetch when render hands back a ticket. Completions are applied through the
//! ticket so a slow response for an old province is dropped.
//!
//! The viewport classifier is injectable through the `viewport` prop; without
//! it the sidebar tracks the window width itself.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and leave the sidebar on its loading placeholder.
//! There is no error banner and no automatic retry; a host can bump
//! `retry_seq` to re-request the current province.

#[cfg(test)]
#[path = "province_sidebar_test.rs"]
mod province_sidebar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::province_about::ProvinceAbout;
use crate::components::province_header::ProvinceHeader;
use crate::components::province_photos::ProvincePhotos;
use crate::components::province_schools::ProvinceSchools;
use crate::components::province_tabs::ProvinceTabs;
use crate::config::PanelConfig;
use crate::net::api::{CatalogHandle, FetchError};
use crate::net::types::ProvinceRecord;
use crate::state::panel::{PanelComposer, PanelView, Rendered, TabContent, ViewModel};
use crate::state::resolver::{Completion, ResolveTicket, resolve};
use crate::state::ui::Tab;
use crate::state::visibility::PanelLayout;
use crate::util::viewport::use_is_narrow;

pub const LOADING_TEXT: &str = "Loading...";

/// Sliding province panel.
///
/// `is_open` is read-only here; dismissal goes through `on_close`.
#[component]
pub fn ProvinceSidebar(
    #[prop(into)] province: Signal<String>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    /// Bump to re-request the current province (e.g. after a failed load).
    #[prop(optional, into)]
    retry_seq: Option<Signal<u64>>,
    /// Narrow-viewport classification; defaults to tracking `innerWidth`.
    #[prop(optional, into)]
    viewport: Option<Signal<bool>>,
) -> impl IntoView {
    let config = use_context::<PanelConfig>().unwrap_or_default();
    let source = use_context::<CatalogHandle>().unwrap_or_else(|| CatalogHandle::http(config.catalog_path.clone()));
    let viewport = viewport.unwrap_or_else(|| use_is_narrow(config.narrow_breakpoint_px));
    let composer = RwSignal::new(PanelComposer::default());
    let view_model = RwSignal::new(ViewModel::Loading);

    {
        let source = source.clone();
        let config = config.clone();
        Effect::new(move || {
            composer.track();
            let key = province.get();
            let open = is_open.get();
            let Some(Rendered { view_model: next, request }) =
                composer.try_update_untracked(|c| c.render(&key, open, &viewport))
            else {
                return;
            };
            if view_model.with_untracked(|current| current != &next) {
                view_model.set(next);
            }
            if let Some(ticket) = request {
                spawn_resolve(composer, source.clone(), config.clone(), ticket);
            }
        });
    }

    if let Some(retry_seq) = retry_seq {
        Effect::new(move |prev: Option<u64>| {
            let seq = retry_seq.get();
            if should_retry(prev, seq)
                && let Some(ticket) = composer.try_update(PanelComposer::retry).flatten()
            {
                spawn_resolve(composer, source.clone(), config.clone(), ticket);
            }
            seq
        });
    }

    let on_select = Callback::new(move |tab: Tab| composer.update(|c| c.select_tab(tab)));

    view! {
        {move || match view_model.get() {
            ViewModel::Loading => view! { <div class="province-sidebar__loading">{LOADING_TEXT}</div> }.into_any(),
            ViewModel::Ready(panel) => render_panel(panel, on_select, on_close),
        }}
    }
}

fn render_panel(panel: PanelView, on_select: Callback<Tab>, on_close: Callback<()>) -> AnyView {
    let PanelView { header, tabs, content, visibility } = panel;
    let province = header.province;
    let active = tabs.active;
    let container_class = visibility.container_class();
    let content_class = visibility.content_class();
    let layout = layout_attr(visibility.layout);
    let hidden = if visibility.is_settled() { "false" } else { "true" };
    let body = match content {
        TabContent::About(content) => view! { <ProvinceAbout province=province.clone() content/> }.into_any(),
        TabContent::Schools(content) => view! { <ProvinceSchools province=province.clone() content/> }.into_any(),
        TabContent::Photos(content) => view! { <ProvincePhotos province=province.clone() content/> }.into_any(),
    };

    view! {
        <aside class=container_class data-layout=layout aria-hidden=hidden>
            <ProvinceHeader province on_close/>
            <ProvinceTabs active on_select/>
            <div class=content_class>{body}</div>
        </aside>
    }
    .into_any()
}

fn spawn_resolve(composer: RwSignal<PanelComposer>, source: CatalogHandle, config: PanelConfig, ticket: ResolveTicket) {
    leptos::task::spawn_local(async move {
        let outcome = resolve(&source, ticket.key(), &config).await;
        composer.update(|c| {
            apply_outcome(c, &ticket, outcome);
        });
    });
}

/// Hand a finished fetch to the composer, logging failures and dropped
/// stale results.
pub(crate) fn apply_outcome(
    composer: &mut PanelComposer,
    ticket: &ResolveTicket,
    outcome: Result<ProvinceRecord, FetchError>,
) -> Completion {
    if let Err(e) = &outcome {
        leptos::logging::warn!("province data fetch failed: province={} error={e}", ticket.key());
    }
    let completion = composer.complete(ticket, outcome);
    if completion == Completion::Stale {
        leptos::logging::log!(
            "dropped stale province data: province={} generation={}",
            ticket.key(),
            ticket.generation()
        );
    }
    completion
}

/// A retry fires on every change of `retry_seq` after the first read.
pub(crate) fn should_retry(prev: Option<u64>, seq: u64) -> bool {
    prev.is_some_and(|prev| prev != seq)
}

pub(crate) fn layout_attr(layout: PanelLayout) -> &'static str {
    match layout {
        PanelLayout::BottomSheet => "sheet",
        PanelLayout::SideDrawer => "drawer",
    }
}
