//! Panel header: province name and close button.

#[cfg(test)]
#[path = "province_header_test.rs"]
mod province_header_test;

use leptos::prelude::*;

/// Header row. Closing is owned by the host; this only fires `on_close`.
#[component]
pub fn ProvinceHeader(province: String, on_close: Callback<()>) -> impl IntoView {
    let label = close_label(&province);

    view! {
        <div class="province-header flex items-center justify-between p-4 border-b border-[#2DD4BF]/20">
            <h2 class="province-header__title text-xl font-semibold text-[#2DD4BF]">{province}</h2>
            <button
                class="province-header__close p-1 rounded-full hover:bg-gray-800"
                aria-label=label.clone()
                title=label
                on:click=move |_| on_close.run(())
            >
                "✕"
            </button>
        </div>
    }
}

pub(crate) fn close_label(province: &str) -> String {
    format!("Close {province} panel")
}
