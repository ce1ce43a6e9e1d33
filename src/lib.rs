pub mod benchmarks;
pub mod candidate;
pub mod cli;
pub mod error;
pub mod experiment;
pub mod frequency;
pub mod history;
pub mod optimizer;
pub mod rng;
pub mod significance;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{OptimizerError, OptionExt, Result, ResultExt};
pub use frequency::FrequencyVector;
pub use history::{History, HistoryKind, HistorySummary};
pub use optimizer::{
    Cga, CgaOptions, FitnessFunction, OnePlusOneEa, Optimizer, RunResult, SigCga, SigCgaOptions,
    TerminationCriterion,
};
pub use rng::RandomNumberGenerator;
pub use significance::{significance, Decision};
