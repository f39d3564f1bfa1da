mod model;
mod naming;

pub use model::{Category, OrderKey, PageMetadata};
pub use naming::{parse_dir_name, parse_numbered, ParsedName};
