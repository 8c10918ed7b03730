pub mod steam_parser;

pub use steam_parser::parse_app_details;
