use crate::haptics::vibrate_tap;
use crate::launcher::MobileApp;
use crate::ui::class_names;
use leptos::*;
use leptos_router::A;

#[component]
pub fn AppTile(app: MobileApp) -> impl IntoView {
    view! {
        <div class="app-tile" on:click=move |_| vibrate_tap()>
            <A href=app.href()>
                <span class=class_names(["app-icon", app.color])>{app.glyph}</span>
                <span class="app-name">{app.name}</span>
            </A>
        </div>
    }
}
