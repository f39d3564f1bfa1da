mod builder;
mod converter;
mod index;

pub use builder::build_site;
