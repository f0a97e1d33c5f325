//! Language switcher.

/// Whether a language option link should be intercepted.
pub fn is_switch_target(href: Option<&str>) -> bool {
    matches!(href, Some(href) if !href.is_empty() && href != "#")
}

/// Result of activating a language option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchDecision {
    /// Show the loader and navigate to the path after the delay.
    Navigate(String),
    /// A switch is already underway; the activation is ignored.
    AlreadySwitching,
}

/// Tracks the in-flight switch so rapid repeat activations queue at most one
/// navigation.
#[derive(Debug, Default)]
pub struct LanguageSwitch {
    pending: Option<String>,
}

impl LanguageSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn activate(&mut self, href: &str) -> SwitchDecision {
        if let Some(pending) = &self.pending {
            tracing::debug!(
                pending = pending.as_str(),
                ignored = href,
                "language switch already pending"
            );
            return SwitchDecision::AlreadySwitching;
        }
        self.pending = Some(href.to_string());
        SwitchDecision::Navigate(href.to_string())
    }

    /// Forget the pending switch, e.g. when the page is restored from the
    /// back-forward cache.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_targets() {
        assert!(is_switch_target(Some("/en/posts/")));
        assert!(!is_switch_target(Some("#")));
        assert!(!is_switch_target(Some("")));
        assert!(!is_switch_target(None));
    }

    #[test]
    fn test_repeat_activation_is_ignored() {
        let mut switch = LanguageSwitch::new();

        assert_eq!(
            switch.activate("/en/"),
            SwitchDecision::Navigate("/en/".to_string())
        );
        assert_eq!(switch.activate("/zh/"), SwitchDecision::AlreadySwitching);
        assert_eq!(switch.pending(), Some("/en/"));

        switch.reset();
        assert_eq!(
            switch.activate("/zh/"),
            SwitchDecision::Navigate("/zh/".to_string())
        );
    }
}
