// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateRecord, IndexScope, JobRecord, MatchRecord};
pub use requests::MatchesQuery;
pub use responses::{ErrorResponse, HealthResponse};
