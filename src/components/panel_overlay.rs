use super::tech_row::stack_row;
use crate::catalog::PanelContent;
use leptos::*;

/// Modal drawn over the details screen, with a dimmed scrim behind it.
/// Clicking the scrim or the close button dismisses it.
#[component]
pub fn PanelOverlay(
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="scrim" on:click=move |_| on_close.call(())></div>
        <div class="panel-modal" role="dialog" aria-modal="true">
            <button class="panel-close" aria-label="Close" on:click=move |_| on_close.call(())>
                "\u{00D7}"
            </button>
            <div class="panel-body">{children()}</div>
        </div>
    }
}

/// View for a projected panel. Empty lists render as an empty `<ul>`.
pub fn panel_body(content: PanelContent<'_>) -> View {
    match content {
        PanelContent::Prose(text) => view! {
            <p class="panel-prose">{text.to_string()}</p>
        }
        .into_view(),
        PanelContent::Stack(entries) => view! {
            <div class="panel-stack">
                {entries.into_iter().map(stack_row).collect_view()}
            </div>
        }
        .into_view(),
        PanelContent::Bullets(_, items) => view! {
            <ul class="panel-bullets">
                {items.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
            </ul>
        }
        .into_view(),
    }
}
