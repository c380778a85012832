use crate::components::PhoneFrame;
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PhoneFrame>
            <header class="not-found-page">
                <h1>"404"</h1>
                <p class="tagline">"This screen doesn't exist"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>
        </PhoneFrame>
    }
}
