pub mod config;
pub mod logging;
pub mod metrics;

pub use config::{load_env_file, Config};
pub use logging::{init_logging, LogFormat};
pub use metrics::Metrics;
