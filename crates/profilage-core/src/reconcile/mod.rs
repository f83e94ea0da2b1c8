mod clean;
mod collect;
mod correct;
mod filter;
mod languages;
mod normalize;
mod pipeline;

pub use clean::{clean_locations, clean_names, EntryCleaner};
pub use collect::SpanCollection;
pub use correct::{FuzzyCorrector, DEFAULT_CORRECTION_THRESHOLD};
pub use filter::{detect_formations, filter_name_leakage};
pub use languages::LanguageMatcher;
pub use normalize::{normalize, NormalizedEntry};
pub use pipeline::{
    BatchResult, PipelineError, PipelineResult, PipelineStats, ProfileOutput, ProfilePipeline,
};
