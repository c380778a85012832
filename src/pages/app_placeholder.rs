use crate::components::{PhoneFrame, Skeleton};
use crate::content::MOBILE_APPS;
use crate::launcher::find_by_slug;
use leptos::*;
use leptos_router::{use_params_map, A};

/// Screen for launcher apps that have no content yet.
#[component]
pub fn AppPlaceholderPage() -> impl IntoView {
    let params = use_params_map();
    let app_name = move || {
        params.with(|p| {
            p.get("name")
                .and_then(|slug| find_by_slug(MOBILE_APPS, slug))
                .map(|app| app.name)
        })
    };

    view! {
        <PhoneFrame>
            {move || match app_name() {
                Some(name) => view! {
                    <section class="app-placeholder">
                        <h1>{name}</h1>
                        <Skeleton class="h-40 w-full"/>
                        <Skeleton class="h-6 w-3/4"/>
                        <Skeleton class="h-6 w-1/2"/>
                        <p class="tagline">"Still loading\u{2026} check back soon."</p>
                    </section>
                }
                .into_view(),
                None => view! { <p class="not-found">"Not found"</p> }.into_view(),
            }}
            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>
        </PhoneFrame>
    }
}
