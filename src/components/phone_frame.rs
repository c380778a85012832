use leptos::*;
use leptos_router::A;

/// Device chrome around every screen: status bar on top, home indicator below.
#[component]
pub fn PhoneFrame(
    #[prop(optional)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main class="phone">
            <div class="phone-screen">
                <div class="status-bar">
                    <span class="status-time">"9:41"</span>
                    <span class="status-notch"></span>
                    <span class="status-icons">"▂▄▆ ◔"</span>
                </div>
                {title.map(|t| view! { <h1 class="screen-title">{t}</h1> })}
                <div class="screen-body no-visible-scrollbar">
                    {children()}
                </div>
                <A href="/" class="home-indicator">
                    <span class="sr-only">"Home"</span>
                </A>
            </div>
        </main>
    }
}
