pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{ReqwestHttpClient, StaticView, TerminalNavigator, TracingDiagnostics};
pub use crate::core::format::{format_date, format_duration, format_duration_str, parse_duration_ms};
pub use crate::core::logout::{bind_logout, LogoutBinding, LogoutHandler, LogoutRoutes};
pub use domain::model::{DateInput, HttpStatus, LogoutOutcome};
pub use utils::error::{PageError, Result};
