use crate::domain::model::LogoutOutcome;
use crate::domain::ports::{Diagnostics, HttpClient, Navigator, View};

pub const LOGOUT_CONTROL_ID: &str = "logout-btn";
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const DEFAULT_LOGIN_PAGE: &str = "/login";

/// 每筆傳輸失敗記錄前面的標籤
pub const LOGOUT_ERROR_LABEL: &str = "Logout error:";

/// 伺服器回應非 2xx 時的 CLI 結束碼
pub const EXIT_REJECTED: i32 = 4;
/// 傳輸失敗時的 CLI 結束碼（與可重試錯誤相同）
pub const EXIT_TRANSPORT_FAILED: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutRoutes {
    pub logout_endpoint: String,
    pub login_page: String,
}

impl Default for LogoutRoutes {
    fn default() -> Self {
        Self {
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
        }
    }
}

/// 結束伺服器端的 session，並導向登入頁
pub struct LogoutHandler<H: HttpClient, N: Navigator, D: Diagnostics> {
    http: H,
    navigator: N,
    diagnostics: D,
    routes: LogoutRoutes,
}

impl<H: HttpClient, N: Navigator, D: Diagnostics> LogoutHandler<H, N, D> {
    pub fn new(http: H, navigator: N, diagnostics: D) -> Self {
        Self::with_routes(http, navigator, diagnostics, LogoutRoutes::default())
    }

    pub fn with_routes(http: H, navigator: N, diagnostics: D, routes: LogoutRoutes) -> Self {
        Self {
            http,
            navigator,
            diagnostics,
            routes,
        }
    }

    /// 一次觸發：送出一個 POST，2xx 才導頁。
    ///
    /// 非 2xx 不導頁也不記錄，只反映在回傳結果；傳輸失敗記錄一次後吞掉。
    pub async fn activate(&self) -> LogoutOutcome {
        tracing::debug!("Sending logout request to {}", self.routes.logout_endpoint);

        match self.http.post(&self.routes.logout_endpoint).await {
            Ok(status) if status.is_ok() => {
                tracing::debug!("Logout accepted with status {}", status);
                self.navigator.navigate(&self.routes.login_page);
                LogoutOutcome::Redirected {
                    location: self.routes.login_page.clone(),
                }
            }
            Ok(status) => {
                tracing::debug!("Logout answered with status {}, staying on page", status);
                LogoutOutcome::Rejected { status }
            }
            Err(e) => {
                let message = e.to_string();
                self.diagnostics.error(LOGOUT_ERROR_LABEL, &message);
                LogoutOutcome::TransportFailed { message }
            }
        }
    }
}

/// 已掛在頁面控制項上的登出處理器
pub struct LogoutBinding<'a, H: HttpClient, N: Navigator, D: Diagnostics> {
    control_id: String,
    handler: &'a LogoutHandler<H, N, D>,
}

impl<'a, H: HttpClient, N: Navigator, D: Diagnostics> LogoutBinding<'a, H, N, D> {
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// 使用者每觸發一次（點擊、按鍵）就呼叫一次
    pub async fn trigger(&self) -> LogoutOutcome {
        tracing::debug!("Control '{}' triggered", self.control_id);
        self.handler.activate().await
    }
}

/// 頁面有 `control_id` 時才掛上 `handler`；找不到控制項不算錯誤
pub fn bind_logout<'a, V, H, N, D>(
    view: &V,
    control_id: &str,
    handler: &'a LogoutHandler<H, N, D>,
) -> Option<LogoutBinding<'a, H, N, D>>
where
    V: View + ?Sized,
    H: HttpClient,
    N: Navigator,
    D: Diagnostics,
{
    if !view.has_control(control_id) {
        tracing::debug!("No '{}' control on this page, logout not bound", control_id);
        return None;
    }

    Some(LogoutBinding {
        control_id: control_id.to_string(),
        handler,
    })
}

/// 把一次登出結果轉成 CLI 結束碼；非 2xx 只會從這裡讓呼叫端知道
pub fn exit_code(outcome: &LogoutOutcome) -> i32 {
    match outcome {
        LogoutOutcome::Redirected { .. } => 0,
        LogoutOutcome::Rejected { .. } => EXIT_REJECTED,
        LogoutOutcome::TransportFailed { .. } => EXIT_TRANSPORT_FAILED,
    }
}
