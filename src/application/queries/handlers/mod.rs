//! Query Handlers

mod status_handlers;

pub use status_handlers::{
    EngineHealth, EngineInfoReport, GetEngineInfoHandler, GetStatusHandler, ListVoicesHandler,
    StatusReport,
};
