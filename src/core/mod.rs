pub mod format;
pub mod logout;

pub use crate::domain::model::{DateInput, HttpStatus, LogoutOutcome};
pub use crate::domain::ports::{ConfigProvider, Diagnostics, HttpClient, Navigator, View};
pub use crate::utils::error::Result;
