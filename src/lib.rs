//! Turns free-form biographical prose into a structured, encyclopedia-style
//! record: lead, infobox facts, ordered sections and optional wiki markup.

pub mod article;
pub mod error;
pub mod extract;
pub mod infobox;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod request;
pub mod settings;

pub use article::{Infobox, InfoboxFields, Section, StructuredArticle, DEFAULT_TEMPLATE};
pub use error::{Error, Result};
pub use pipeline::{run, structure};
pub use render::render;
pub use request::{process, ArticleInput, StructureOptions};
pub use settings::Settings;
