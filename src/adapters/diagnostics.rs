use crate::core::Diagnostics;

/// 以 `tracing` error 事件輸出診斷訊息
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&self, label: &str, detail: &str) {
        tracing::error!("{} {}", label, detail);
    }
}
