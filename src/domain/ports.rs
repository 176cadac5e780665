use crate::domain::model::HttpStatus;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 發送頁面需要的無 body 請求。
///
/// 回傳 `Err` 代表沒拿到狀態碼（傳輸失敗）。
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post(&self, path: &str) -> Result<HttpStatus>;
}

/// 整頁導向；之後原頁面不再執行任何東西
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// 使用者看不到的錯誤輸出
pub trait Diagnostics: Send + Sync {
    fn error(&self, label: &str, detail: &str);
}

/// 目前頁面上的控制項
pub trait View {
    fn has_control(&self, id: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn logout_endpoint(&self) -> &str;
    fn login_page(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn session_cookie(&self) -> Option<&str>;
}
