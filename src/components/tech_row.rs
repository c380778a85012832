use crate::catalog::{monogram, StackEntry};
use crate::ui::class_names;
use leptos::*;

/// One technology in the stack panel: its icon (or a monogram badge) and its name.
#[component]
pub fn TechRow(label: String, icon_path: Option<String>, invert: bool) -> impl IntoView {
    let icon = match icon_path {
        Some(path) => view! {
            <img
                src=path
                alt=label.clone()
                width="50"
                height="50"
                loading="lazy"
                class=class_names(["tech-icon", if invert { "invert" } else { "" }])
            />
        }
        .into_view(),
        None => view! {
            <span class="tech-icon tech-fallback" aria-hidden="true">{monogram(&label)}</span>
        }
        .into_view(),
    };

    view! {
        <div class="tech-row" title=label.clone()>
            {icon}
            <div class="tech-label">{label}</div>
        </div>
    }
}

pub fn stack_row(entry: StackEntry<'_>) -> View {
    view! {
        <TechRow
            label=entry.label.to_string()
            icon_path=entry.icon.map(|icon| icon.path.clone())
            invert=entry.icon.is_some_and(|icon| icon.invert_on_dark)
        />
    }
    .into_view()
}
