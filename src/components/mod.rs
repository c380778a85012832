mod app_tile;
mod panel_overlay;
mod phone_frame;
mod skeleton;
mod tech_row;

pub use app_tile::AppTile;
pub use panel_overlay::{panel_body, PanelOverlay};
pub use phone_frame::PhoneFrame;
pub use skeleton::Skeleton;
pub use tech_row::TechRow;
