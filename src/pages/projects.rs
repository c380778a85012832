use crate::components::PhoneFrame;
use crate::use_catalog;
use leptos::*;
use leptos_router::A;

/// Every project in catalog order, each linking to its details screen.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let catalog = use_catalog();

    let cards = catalog
        .all_records()
        .iter()
        .cloned()
        .map(|project| {
            view! {
                <li class="project-card">
                    <A href=format!("/projects/{}", project.id)>
                        <img
                            src=project.thumbnail.clone()
                            alt=project.title.clone()
                            width="400"
                            height="200"
                            loading="lazy"
                            class="project-card-thumbnail"
                        />
                        <div class="project-card-meta">
                            <span class="project-card-title">{project.title.clone()}</span>
                            <span class="project-card-year">{project.year.clone()}</span>
                        </div>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <PhoneFrame title="Projects">
            <ul class="project-grid">{cards}</ul>
        </PhoneFrame>
    }
}
