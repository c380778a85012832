use crate::components::PhoneFrame;
use crate::content::{MediaItem, MediaKind, GALLERY};
use leptos::*;

fn media_view(item: &MediaItem) -> View {
    let alt = if item.title.is_empty() { item.id } else { item.title };
    let media = match item.kind {
        MediaKind::Photo => view! {
            <img src=item.source alt=alt loading="lazy" class="media-thumb"/>
        }
        .into_view(),
        MediaKind::Video => view! {
            <video src=item.source muted=true controls=true preload="metadata" class="media-thumb"></video>
        }
        .into_view(),
    };

    view! {
        <figure class="media-item" class:favorite=item.favorite title=item.title>
            {media}
            {item.favorite.then(|| view! { <span class="media-favorite">"\u{2665}"</span> })}
        </figure>
    }
    .into_view()
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <PhoneFrame title="Photos">
            {GALLERY
                .iter()
                .map(|section| view! {
                    <section class="gallery-section">
                        <h2>{section.title}</h2>
                        <div class="gallery-grid">
                            {section.items.iter().map(media_view).collect_view()}
                        </div>
                    </section>
                })
                .collect_view()}
        </PhoneFrame>
    }
}
