pub mod catalog;
pub mod components;
pub mod content;
pub mod haptics;
pub mod launcher;
pub mod pages;
pub mod site;
pub mod telemetry;
pub mod ui;

use catalog::Catalog;
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use pages::{
    AppPlaceholderPage, BrowserPage, GalleryPage, HomePage, InfoPage, NotFoundPage,
    ProjectDetailsPage, ProjectsPage,
};
use site::SiteHead;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate` the router updates its location signal but `<Routes>` does not
/// always re-evaluate, so the page is reloaded instead. Screen state is
/// per-mount anyway, so nothing is lost.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(
            "popstate",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// The catalog provided at the root. Falls back to an empty catalog, in which
/// every lookup is "not found", if no root has provided one.
pub fn use_catalog() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>().unwrap_or_default()
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    provide_meta_context();

    view! {
        <SiteHead/>
        <ErrorBoundary fallback=|errors| view! {
            <main class="phone">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The site content could not be loaded."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Builds the catalog and mounts the routes. A broken catalog configuration
/// surfaces through the enclosing ErrorBoundary.
#[component]
fn RootInner() -> impl IntoView {
    content::load_catalog()
        .inspect_err(|e| tracing::error!(error = %e, "failed to load catalog"))
        .map(|catalog| {
            provide_context(Rc::new(catalog));

            view! {
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/projects" view=ProjectsPage/>
                        <Route path="/projects/:id" view=ProjectDetailsPage/>
                        <Route path="/info" view=InfoPage/>
                        <Route path="/browser" view=BrowserPage/>
                        <Route path="/gallery" view=GalleryPage/>
                        <Route path="/apps/:name" view=AppPlaceholderPage/>
                        <Route path="/*" view=NotFoundPage/>
                    </Routes>
                </Router>
            }
        })
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();
    setup_popstate_reload();
    mount_to_body(Root);
}
