//! About tab: hero image, description, headline stats, volunteers.

#[cfg(test)]
#[path = "province_about_test.rs"]
mod province_about_test;

use leptos::prelude::*;

use crate::net::types::{ProvinceStats, VolunteerInfo};
use crate::state::panel::AboutContent;

#[component]
pub fn ProvinceAbout(province: String, content: AboutContent) -> impl IntoView {
    let AboutContent { image, description, volunteers, stats } = content;
    let has_image = !image.is_empty();
    let alt = format!("{province} landscape");
    let has_volunteers = !volunteers.is_empty();

    view! {
        <div class="province-about space-y-4">
            <Show when=move || has_image>
                <img class="province-about__image w-full h-48 object-cover rounded-lg" src=image.clone() alt=alt.clone()/>
            </Show>
            <p class="province-about__description leading-relaxed">{description}</p>
            <div class="province-about__stats grid grid-cols-2 gap-3">
                <div class="province-about__stat p-3 rounded-lg bg-gray-800">
                    <span class="block text-2xl font-bold text-[#2DD4BF]">{stats.districts}</span>
                    <span class="text-xs uppercase text-gray-400">{count_label(stats.districts, "District", "Districts")}</span>
                </div>
                <div class="province-about__stat p-3 rounded-lg bg-gray-800">
                    <span class="block text-2xl font-bold text-[#2DD4BF]">{stats.students}</span>
                    <span class="text-xs uppercase text-gray-400">{count_label(stats.students, "Student", "Students")}</span>
                </div>
            </div>
            <p class="sr-only">{stats_summary(stats)}</p>
            <h3 class="province-about__heading text-lg font-semibold text-gray-100">"Volunteers"</h3>
            <Show
                when=move || has_volunteers
                fallback=|| view! { <p class="province-about__empty text-gray-500">"No volunteers listed yet."</p> }
            >
                <ul class="province-about__volunteers space-y-1">
                    {volunteers
                        .iter()
                        .map(|v| view! { <li class="province-about__volunteer">{volunteer_line(v)}</li> })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

pub(crate) fn count_label(count: u64, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// One-line text form of the stats, e.g. `"3 districts, 1 student"`.
pub(crate) fn stats_summary(stats: ProvinceStats) -> String {
    format!(
        "{} {}, {} {}",
        stats.districts,
        count_label(stats.districts, "district", "districts"),
        stats.students,
        count_label(stats.students, "student", "students"),
    )
}

pub(crate) fn volunteer_line(volunteer: &VolunteerInfo) -> String {
    match volunteer.contact.as_deref().map(str::trim) {
        Some(contact) if !contact.is_empty() => format!("{} ({contact})", volunteer.name),
        _ => volunteer.name.clone(),
    }
}
