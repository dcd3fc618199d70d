// Mon Oct 19 2026 - Alex

pub mod engine;
pub mod file;
pub mod substitutions;

pub use engine::{Rendered, TemplateEngine, TokenSyntax};
pub use file::{RenderedFile, TemplatedFile};
pub use substitutions::Substitutions;
