pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod store;

pub use models::{CheckResult, Label, LabeledSource, Source, Verdict};
pub use pipeline::FactCheckPipeline;
