//! Application Queries - CQRS 查询

mod status_queries;

pub mod handlers;

pub use status_queries::{GetEngineInfo, GetStatus, ListVoices};
