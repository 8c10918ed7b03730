pub mod json_file;

pub use json_file::{JsonStorage, SOURCE_LABEL};
