mod renderer;
mod templates;

pub use renderer::{
    AboutLink, ArticleEntry, IndexContext, LayoutRenderer, PageContext, ProgramEntry,
    StandaloneContext,
};
