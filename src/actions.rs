use serde::{Deserialize, Serialize};

/// Scroll offset past which the navbar switches to its condensed style.
pub const NAV_CONDENSE_OFFSET: f64 = 20.0;
/// Scroll offset past which the footer shows the back-to-top button.
pub const SCROLL_TOP_OFFSET: f64 = 500.0;

/// What a contact card does when clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum ContactAction {
    CopyEmail(String),
    OpenExternal(String),
}

impl ContactAction {
    /// Link target for progressive enhancement before hydration.
    pub fn href(&self) -> String {
        match self {
            Self::CopyEmail(address) => format!("mailto:{address}"),
            Self::OpenExternal(url) => url.clone(),
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        matches!(self, Self::OpenExternal(_))
    }
}

pub fn nav_condensed(scroll_y: f64) -> bool {
    scroll_y > NAV_CONDENSE_OFFSET
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_deserialize() {
        let copy: ContactAction =
            serde_json::from_str(r#"{"kind":"copy_email","target":"me@example.com"}"#).unwrap();
        assert_eq!(copy, ContactAction::CopyEmail("me@example.com".to_string()));
        assert_eq!(copy.href(), "mailto:me@example.com");
        assert!(!copy.opens_new_tab());

        let open: ContactAction =
            serde_json::from_str(r#"{"kind":"open_external","target":"https://example.com"}"#)
                .unwrap();
        assert_eq!(open.href(), "https://example.com");
        assert!(open.opens_new_tab());

        assert!(serde_json::from_str::<ContactAction>(r#"{"kind":"call","target":"x"}"#).is_err());
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!nav_condensed(0.0));
        assert!(!nav_condensed(20.0));
        assert!(nav_condensed(20.5));

        assert!(!show_scroll_top(120.0));
        assert!(!show_scroll_top(500.0));
        assert!(show_scroll_top(501.0));
    }
}
