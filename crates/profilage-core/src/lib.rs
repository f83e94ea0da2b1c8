pub mod error;
pub mod profile;
pub mod reconcile;
pub mod services;
pub mod span;
pub mod vocab;

pub use error::{Error, Result};
pub use profile::{Identity, LanguageSkill, StructuredProfile};
pub use reconcile::{
    normalize, BatchResult, LanguageMatcher, NormalizedEntry, PipelineError, PipelineStats,
    ProfileOutput, ProfilePipeline, SpanCollection,
};
pub use services::{
    BestMatch, FuzzyScorer, IdentityLemmatizer, Lemmatizer, RatioScorer, Tagger, TaggerError,
    TaggerResult,
};
pub use span::{RawSpan, SpanLabel, SpanSource};
pub use vocab::{CleaningRules, ConfigError, ConfigResult, Lexicons, Vocabulary};
