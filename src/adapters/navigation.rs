use crate::core::Navigator;
use std::io::Write;
use std::sync::Mutex;
use url::Url;

/// 代替瀏覽器網址列：印出導向的完整 URL
pub struct TerminalNavigator<W: Write + Send = std::io::Stdout> {
    origin: Url,
    out: Mutex<W>,
}

impl TerminalNavigator {
    pub fn stdout(origin: Url) -> Self {
        Self::new(origin, std::io::stdout())
    }
}

impl<W: Write + Send> TerminalNavigator<W> {
    pub fn new(origin: Url, out: W) -> Self {
        Self {
            origin,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Navigator for TerminalNavigator<W> {
    fn navigate(&self, location: &str) {
        let target = self
            .origin
            .join(location)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| location.to_string());

        tracing::info!("Navigating to {}", target);

        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "Location: {}", target) {
            tracing::warn!("Could not write navigation target: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_absolute_location() {
        let origin = Url::parse("http://localhost:5000").unwrap();
        let navigator = TerminalNavigator::new(origin, Vec::new());

        navigator.navigate("/login");

        let written = String::from_utf8(navigator.into_inner()).unwrap();
        assert_eq!(written, "Location: http://localhost:5000/login\n");
    }
}
