pub mod aggregator;
pub mod check;
pub mod classifier;
pub mod lexicon;
pub mod llm;
pub mod mock;
pub mod retriever;
pub mod search;
pub mod summary;
pub mod traits;

pub use aggregator::{aggregate, LabelCounts};
pub use check::{FactCheckPipeline, Stage};
pub use classifier::{
    classify_with_rules, parse_judgments, EvidenceClassifier, Judgment, LexiconScore,
};
pub use lexicon::{select_domain, Domain, Lexicon};
pub use llm::OpenAiGenerator;
pub use mock::{FailingGenerator, FailingSearch, ScriptedGenerator, SlowSearch, StaticSearch};
pub use retriever::SourceRetriever;
pub use search::DuckDuckGoSearch;
pub use summary::{render_template, SummaryGenerator};
pub use traits::{Classify, Retrieve, SearchHit, SearchProvider, Summarize, TextGenerator};
