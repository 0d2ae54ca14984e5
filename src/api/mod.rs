pub mod reddit;
pub mod reddit_dto;
pub mod transport;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

pub const USER_AGENT: &str = "TeslaDashboard/0.1 (+https://localhost)";
