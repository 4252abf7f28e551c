pub mod logging;
pub mod metrics;
pub mod page;
pub mod pipeline;
pub mod ui_server;
