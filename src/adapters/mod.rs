// Adapters 層：domain ports 的具體實作 (http, navigation, diagnostics, view)

pub mod diagnostics;
pub mod http;
pub mod navigation;
pub mod view;

pub use diagnostics::TracingDiagnostics;
pub use http::ReqwestHttpClient;
pub use navigation::TerminalNavigator;
pub use view::StaticView;
