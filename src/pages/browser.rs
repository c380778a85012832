use crate::components::PhoneFrame;
use crate::content::BROWSER_HISTORY;
use leptos::*;

#[component]
pub fn BrowserPage() -> impl IntoView {
    view! {
        <PhoneFrame title="Chrome">
            <div class="browser-bar">
                <span class="browser-search">"Search or type URL"</span>
            </div>
            <section class="browser-history">
                <h2>"History"</h2>
                <ul>
                    {BROWSER_HISTORY
                        .iter()
                        .map(|entry| view! {
                            <li class="history-entry" data-id=entry.id>
                                <span class="history-query">{entry.query}</span>
                                <span class="history-time">{entry.time}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </PhoneFrame>
    }
}
