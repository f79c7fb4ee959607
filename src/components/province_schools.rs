//! Schools tab: directory of schools with whatever contact details exist.

#[cfg(test)]
#[path = "province_schools_test.rs"]
mod province_schools_test;

use leptos::prelude::*;

use crate::net::types::SchoolInfo;
use crate::state::panel::SchoolsContent;

#[component]
pub fn ProvinceSchools(province: String, content: SchoolsContent) -> impl IntoView {
    let schools = content.schools;
    let has_schools = !schools.is_empty();
    let empty_text = empty_schools_text(&province);

    view! {
        <div class="province-schools space-y-3">
            <Show
                when=move || has_schools
                fallback=move || view! { <p class="province-schools__empty text-gray-500">{empty_text.clone()}</p> }
            >
                <ul class="province-schools__list space-y-3">
                    {schools
                        .iter()
                        .map(|school| {
                            view! {
                                <li class="province-schools__item p-3 rounded-lg bg-gray-800">
                                    <h4 class="province-schools__name font-semibold text-gray-100">{school.name.clone()}</h4>
                                    {contact_lines(school)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <p class="province-schools__contact text-sm">
                                                    <span class="text-gray-400">{label}": "</span>
                                                    {value}
                                                </p>
                                            }
                                        })
                                        .collect_view()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

pub(crate) fn empty_schools_text(province: &str) -> String {
    format!("No schools listed for {province}.")
}

/// Labelled contact rows, skipping fields that are absent or blank.
pub(crate) fn contact_lines(school: &SchoolInfo) -> Vec<(&'static str, String)> {
    [("Address", &school.address), ("Phone", &school.phone), ("Email", &school.email)]
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| (label, value.to_owned()))
        })
        .collect()
}
