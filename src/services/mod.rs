// Service exports
pub mod elasticsearch;
pub mod index;

pub use elasticsearch::{ElasticsearchAuth, ElasticsearchClient, ElasticsearchIndices};
pub use index::{IndexError, RawHit, SearchIndex};
