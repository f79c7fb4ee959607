//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::province_sidebar::ProvinceSidebar;
use crate::config::PanelConfig;
use crate::net::api::CatalogHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides panel config and the catalog source, and owns the panel's
/// `province` and `is_open` inputs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PanelConfig::default();
    provide_context(CatalogHandle::http(config.catalog_path.clone()));
    provide_context(config);

    let province = RwSignal::new(String::new());
    let draft = RwSignal::new(String::new());
    let is_open = RwSignal::new(false);
    let retry_seq = RwSignal::new(0_u64);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = draft.get().trim().to_owned();
        if name.is_empty() {
            return;
        }
        province.set(name);
        is_open.set(true);
    };
    let on_close = Callback::new(move |()| is_open.set(false));

    view! {
        <Stylesheet id="leptos" href="/pkg/province-panel.css"/>
        <Title text="Province Explorer"/>

        <main class="province-app">
            <form class="province-app__picker" on:submit=on_submit>
                <input
                    class="province-app__input"
                    type="text"
                    placeholder="Province name"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Show"</button>
                <button
                    class="btn"
                    type="button"
                    disabled=move || province.get().is_empty() || is_open.get()
                    on:click=move |_| is_open.set(true)
                >
                    "Reopen"
                </button>
                <button
                    class="btn"
                    type="button"
                    disabled=move || province.get().is_empty()
                    on:click=move |_| retry_seq.update(|n| *n += 1)
                >
                    "Reload data"
                </button>
            </form>

            <Show when=move || !province.get().is_empty()>
                <ProvinceSidebar
                    province=province
                    is_open=is_open
                    on_close=on_close
                    retry_seq=retry_seq
                />
            </Show>
        </main>
    }
}
