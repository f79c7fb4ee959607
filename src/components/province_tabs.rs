//! Tab strip for About / Schools / Photos.

#[cfg(test)]
#[path = "province_tabs_test.rs"]
mod province_tabs_test;

use leptos::prelude::*;

use crate::state::ui::Tab;

const TAB_BASE_CLASS: &str = "province-tabs__tab flex-1 py-2 text-sm font-medium transition-colors";
const TAB_ACTIVE_CLASS: &str = "province-tabs__tab--active text-[#2DD4BF] border-b-2 border-[#2DD4BF]";
const TAB_IDLE_CLASS: &str = "text-gray-400 hover:text-gray-200";

#[component]
pub fn ProvinceTabs(active: Tab, on_select: Callback<Tab>) -> impl IntoView {
    view! {
        <div class="province-tabs flex border-b border-[#2DD4BF]/20" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let selected = tab == active;
                    let aria_selected = if selected { "true" } else { "false" };
                    view! {
                        <button
                            id=tab_dom_id(tab)
                            role="tab"
                            class=tab_class(selected)
                            aria-selected=aria_selected
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

pub(crate) fn tab_dom_id(tab: Tab) -> String {
    format!("province-tab-{}", tab.id())
}

pub(crate) fn tab_class(selected: bool) -> String {
    let state = if selected { TAB_ACTIVE_CLASS } else { TAB_IDLE_CLASS };
    format!("{TAB_BASE_CLASS} {state}")
}
