pub mod dashboard;
pub mod render;
pub mod server;

pub use dashboard::{Dashboard, DashboardView};
