pub mod allocation;
pub mod answer;
pub mod archetype;
pub mod baseline;
pub mod config;
pub mod profile;
pub mod question;
pub mod session;
pub mod value;

pub use allocation::{
    Allocation, AllocationCategory, ALLOCATION_BUDGET, ALLOCATION_WEIGHT_SCALE,
};
pub use answer::{Answer, Contradiction};
pub use archetype::{Archetype, ArchetypeCatalog};
pub use baseline::{Baselines, TrackBaseline};
pub use config::{Config, LoggingConfig, ScoringConfig};
pub use profile::{ArchetypeAffinity, ProfileReport, RankedValue};
pub use question::{Phase, Question, QuestionBank, QuestionGraph, QuestionOption, QuestionTrack};
pub use session::{Session, SessionStats};
pub use value::{NormalizedScores, Value, ValueDelta, ValueScores};
