pub mod resolver;
pub mod rewriter;

pub use rewriter::AssetRewriter;
