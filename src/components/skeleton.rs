use crate::ui::class_names;
use leptos::*;

/// Flashing placeholder block shown where content has not loaded yet.
#[component]
pub fn Skeleton(
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=class_names(["animate-flash rounded-md", class.as_str()]) aria-hidden="true"></div>
    }
}
