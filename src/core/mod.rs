// Core matching exports
pub mod builder;
pub mod matcher;
pub mod projector;
pub mod query;

pub use builder::{build_candidate_queries, build_job_queries, skill_overlap_threshold};
pub use matcher::{Entity, Matcher};
pub use projector::{project, MISSING_SCORE};
pub use query::{BoolQuery, Predicate, RangeBound};
