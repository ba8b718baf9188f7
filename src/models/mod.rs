pub mod result;
pub mod source;
pub mod verdict;

pub use result::CheckResult;
pub use source::{truncate_chars, Label, LabeledSource, Source, MAX_SNIPPET_CHARS, MAX_TITLE_CHARS};
pub use verdict::{Assessment, Verdict};
