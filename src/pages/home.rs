use crate::components::{AppTile, PhoneFrame, Skeleton};
use crate::content::{DOCK_APPS, MOBILE_APPS};
use crate::launcher::visible_apps;
use leptos::*;

/// Home launcher: swipeable pages of app tiles above a fixed dock.
#[component]
pub fn HomePage() -> impl IntoView {
    let pages = MOBILE_APPS
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let apps = visible_apps(index, page);
            if apps.is_empty() {
                // Reserved for the music widget.
                view! {
                    <section class="launcher-page widget-page">
                        <div class="music-widget">
                            <Skeleton class="music-art"/>
                            <span class="music-title">"Nothing playing"</span>
                        </div>
                    </section>
                }
                .into_view()
            } else {
                let class = if index == 0 {
                    "launcher-page first-page"
                } else {
                    "launcher-page"
                };
                view! {
                    <section class=class>
                        {apps.iter().map(|app| view! { <AppTile app=*app/> }).collect_view()}
                    </section>
                }
                .into_view()
            }
        })
        .collect_view();

    view! {
        <PhoneFrame>
            <div class="launcher">
                <div class="launcher-clock">
                    <span class="clock-time">"9:41"</span>
                    <span class="clock-date">"Moobi"</span>
                </div>
                <div class="launcher-pages">{pages}</div>
            </div>
            <nav class="dock">
                {DOCK_APPS.iter().map(|app| view! { <AppTile app=*app/> }).collect_view()}
            </nav>
        </PhoneFrame>
    }
}
