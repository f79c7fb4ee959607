//! Photos tab: image gallery grid.

#[cfg(test)]
#[path = "province_photos_test.rs"]
mod province_photos_test;

use leptos::prelude::*;

use crate::state::panel::PhotosContent;

#[component]
pub fn ProvincePhotos(province: String, content: PhotosContent) -> impl IntoView {
    let images = gallery_images(content.images);

    view! {
        <div class="province-photos grid grid-cols-2 gap-2">
            {images
                .into_iter()
                .enumerate()
                .map(|(index, src)| {
                    view! {
                        <img
                            class="province-photos__image w-full h-32 object-cover rounded-lg"
                            src=src
                            alt=photo_alt(&province, index)
                            loading="lazy"
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Drop blank URLs so the grid never renders broken `<img>` tags.
pub(crate) fn gallery_images(images: Vec<String>) -> Vec<String> {
    images.into_iter().filter(|src| !src.trim().is_empty()).collect()
}

pub(crate) fn photo_alt(province: &str, index: usize) -> String {
    format!("{province} photo {}", index + 1)
}
