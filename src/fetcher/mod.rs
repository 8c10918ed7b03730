pub mod batch;
pub mod client;
pub mod traits;

pub use batch::{fetch_all, fetch_game};
pub use client::SteamClient;
pub use traits::CatalogClient;
