mod app_placeholder;
mod browser;
mod gallery;
mod home;
mod info;
mod not_found;
mod project_details;
mod projects;

pub use app_placeholder::AppPlaceholderPage;
pub use browser::BrowserPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use info::InfoPage;
pub use not_found::NotFoundPage;
pub use project_details::{ProjectDetails, ProjectDetailsPage};
pub use projects::ProjectsPage;
