use crate::core::View;
use std::collections::HashSet;

/// 控制項事先已知的頁面
#[derive(Debug, Clone, Default)]
pub struct StaticView {
    controls: HashSet<String>,
}

impl StaticView {
    pub fn new<I, S>(controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            controls: controls.into_iter().map(Into::into).collect(),
        }
    }
}

impl View for StaticView {
    fn has_control(&self, id: &str) -> bool {
        self.controls.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_control() {
        let view = StaticView::new(["logout-btn", "recommend-btn"]);
        assert!(view.has_control("logout-btn"));
        assert!(!view.has_control("pass-btn"));
        assert!(!StaticView::default().has_control("logout-btn"));
    }
}
