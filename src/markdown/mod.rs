pub mod engine;
pub mod renderer;

pub use engine::Flavor;
pub use renderer::MarkdownRenderer;
