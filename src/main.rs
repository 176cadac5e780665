use clap::Parser;
use page_glue::config::{Command, LogFormat};
use page_glue::core::logout::{self, LOGOUT_CONTROL_ID};
use page_glue::utils::{logger, validation::Validate};
use page_glue::{
    bind_logout, format_date, format_duration_str, CliConfig, DateInput, LogoutHandler,
    LogoutOutcome, PageError, ReqwestHttpClient, StaticView, TerminalNavigator, TomlConfig,
    TracingDiagnostics,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli.command);
    }

    let code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => report(&e),
    };

    if code != 0 {
        std::process::exit(code);
    }
}

async fn run(cli: &CliConfig) -> page_glue::Result<i32> {
    match &cli.command {
        Command::Logout { json } => {
            // 讀取設定檔並套用命令列覆寫，再驗證
            let config = cli.resolve()?;
            config.validate()?;
            run_logout(&config, *json).await
        }
        Command::FormatDate { input, timestamp } => {
            let value = if *timestamp {
                let millis: i64 = input.trim().parse().map_err(|_| PageError::InvalidInput {
                    message: format!("'{}' is not a millisecond timestamp", input),
                })?;
                DateInput::TimestampMillis(millis)
            } else {
                DateInput::Text(input.clone())
            };
            println!("{}", format_date(value));
            Ok(0)
        }
        Command::FormatDuration { milliseconds } => {
            println!("{}", format_duration_str(milliseconds)?);
            Ok(0)
        }
    }
}

async fn run_logout(config: &TomlConfig, json: bool) -> page_glue::Result<i32> {
    let view = StaticView::new(config.page.controls.iter().cloned());
    let http = ReqwestHttpClient::from_config(config)?;
    let navigator = TerminalNavigator::stdout(http.base_url().clone());
    let handler =
        LogoutHandler::with_routes(http, navigator, TracingDiagnostics, config.logout_routes());

    let Some(binding) = bind_logout(&view, LOGOUT_CONTROL_ID, &handler) else {
        tracing::info!("Page has no '{}' control, nothing to do", LOGOUT_CONTROL_ID);
        return Ok(0);
    };

    let outcome = binding.trigger().await;
    if json {
        println!("{}", serde_json::to_string(&outcome)?);
    }

    if let LogoutOutcome::Rejected { status } = &outcome {
        // 頁面維持原狀，只靠結束碼告知呼叫端
        tracing::debug!("Logout not accepted (status {})", status);
    }

    Ok(logout::exit_code(&outcome))
}

fn report(e: &PageError) -> i32 {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    e.exit_code()
}
