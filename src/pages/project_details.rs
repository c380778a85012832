use crate::catalog::{panel, Disclosure, Panel, Project};
use crate::components::{panel_body, PanelOverlay, PhoneFrame};
use crate::haptics::vibrate_tap;
use crate::use_catalog;
use leptos::*;
use leptos_router::use_params_map;

/// Route view for `/projects/:id`: resolves the id and shows the project or "Not found".
#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let catalog = use_catalog();
    let params = use_params_map();
    let project_id = move || params.with(|p| p.get("id").cloned());

    view! {
        <PhoneFrame>
            {move || {
                let id = project_id();
                match catalog.find_by_id(id.as_deref()) {
                    Some(project) => view! { <ProjectDetails project=project.clone()/> }.into_view(),
                    None => {
                        tracing::warn!(id = ?id, "no project with this id");
                        view! { <p class="not-found">"Not found"</p> }.into_view()
                    }
                }
            }}
        </PhoneFrame>
    }
}

/// A row that leaves the site, or inert text when the project has no such link.
fn link_row(label: &'static str, url: Option<&str>) -> View {
    match url {
        Some(href) => view! {
            <li class="detail-row">
                <a href=href.to_string() target="_blank" rel="noopener" class="detail-link">
                    <p>{label}</p>
                    <span class="row-arrow">"\u{2197}"</span>
                </a>
            </li>
        }
        .into_view(),
        None => view! {
            <li class="detail-row unavailable" aria-disabled="true">
                <p>{label}</p>
                <span class="row-note">"Unavailable"</span>
            </li>
        }
        .into_view(),
    }
}

/// Details screen for one project. Each mount starts with every panel closed.
#[component]
pub fn ProjectDetails(project: Project) -> impl IntoView {
    let catalog = use_catalog();
    let disclosure = create_rw_signal(Disclosure::default());

    let title = project.title.clone();
    let thumbnail = project.thumbnail.clone();
    let live_demo = link_row("Live Demo", project.live_url());
    let source_code = link_row("Source Code", project.github_url());
    let project = store_value(project);

    let open = move |panel: Panel| {
        vibrate_tap();
        project.with_value(|p| tracing::debug!(project = %p.id, ?panel, "panel opened"));
        disclosure.update(|d| d.open(panel));
    };
    let close = move || {
        tracing::debug!("panel closed");
        disclosure.update(|d| d.close());
    };

    let rows = Panel::ALL
        .into_iter()
        .map(|panel| {
            view! {
                <li class="detail-row clickable" on:click=move |_| open(panel)>
                    <p>{panel.label()}</p>
                    <span class="row-arrow">"\u{2192}"</span>
                </li>
            }
        })
        .collect_view();

    let overlay = move || {
        let active = disclosure.get().active();
        project.with_value(|p| {
            panel::render(active, p, catalog.icons()).map(|content| {
                let body = panel_body(content);
                view! {
                    <PanelOverlay on_close=move |_| close()>
                        {body}
                    </PanelOverlay>
                }
            })
        })
    };

    view! {
        <div class="project-details">
            <img
                src=thumbnail
                alt=title.clone()
                width="400"
                height="200"
                class="project-thumbnail"
            />

            <ul class="detail-list">
                <li class="detail-row">
                    <p>"Name"</p>
                    <h1 class="project-title">{title}</h1>
                </li>
                {rows}
                {live_demo}
                {source_code}
            </ul>

            {overlay}
        </div>
    }
}
