use crate::core::logout::{
    LogoutRoutes, DEFAULT_LOGIN_PAGE, DEFAULT_LOGOUT_ENDPOINT, LOGOUT_CONTROL_ID,
};
use crate::core::ConfigProvider;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub routes: RoutesConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub session_cookie: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            session_cookie: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub logout_endpoint: String,
    pub login_page: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// 頁面上有的控制項 id
    pub controls: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            controls: vec![LOGOUT_CONTROL_ID.to_string()],
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SESSION_COOKIE})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("server.base_url", &self.server.base_url)?;
        validation::validate_positive_number(
            "server.timeout_seconds",
            self.server.timeout_seconds,
            1,
        )?;
        validation::validate_route_path("routes.logout_endpoint", &self.routes.logout_endpoint)?;
        validation::validate_route_path("routes.login_page", &self.routes.login_page)?;

        if let Some(cookie) = &self.server.session_cookie {
            if cookie.trim().is_empty() {
                return Err(PageError::ConfigValidationError {
                    field: "server.session_cookie".to_string(),
                    message: "session cookie cannot be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// 依設定組出登出處理器使用的路徑
    pub fn logout_routes(&self) -> LogoutRoutes {
        LogoutRoutes {
            logout_endpoint: self.logout_endpoint().to_string(),
            login_page: self.login_page().to_string(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn logout_endpoint(&self) -> &str {
        &self.routes.logout_endpoint
    }

    fn login_page(&self) -> &str {
        &self.routes.login_page
    }

    fn timeout_seconds(&self) -> u64 {
        self.server.timeout_seconds
    }

    fn session_cookie(&self) -> Option<&str> {
        self.server.session_cookie.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
