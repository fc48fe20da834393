//! Theme styles
//!
//! Pure style computation for the dark-mode toggle. The toggle is a
//! checklist whose value either contains `"dark"` or is empty, giving
//! exactly two observable states. Only the foreground color changes; the
//! background stays constant in both themes.

use serde::Serialize;

/// Container background, identical in light and dark mode.
pub const BACKGROUND_COLOR: &str = "#99d6ff";

/// Inline CSS for one styled element, serialized with camelCase keys the
/// page applies directly via `Object.assign(element.style, ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementStyle {
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(rename = "textAlign", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

/// Styles for the page container and the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeStyles {
    pub container: ElementStyle,
    pub header: ElementStyle,
}

/// Compute container and header styles from the toggle value.
pub fn theme_styles(toggle: &[String]) -> ThemeStyles {
    let is_dark = toggle.iter().any(|v| v == "dark");
    let foreground = if is_dark { "white" } else { "black" };

    ThemeStyles {
        container: ElementStyle {
            background_color: Some(BACKGROUND_COLOR.to_string()),
            color: foreground.to_string(),
            padding: Some("20px".to_string()),
            text_align: None,
        },
        header: ElementStyle {
            background_color: None,
            color: foreground.to_string(),
            padding: None,
            text_align: Some("center".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_toggle_white_foreground() {
        let styles = theme_styles(&["dark".to_string()]);
        assert_eq!(styles.container.color, "white");
        assert_eq!(styles.header.color, "white");
        assert_eq!(
            styles.container.background_color.as_deref(),
            Some(BACKGROUND_COLOR)
        );
    }

    #[test]
    fn test_empty_toggle_black_foreground() {
        let styles = theme_styles(&[]);
        assert_eq!(styles.container.color, "black");
        assert_eq!(styles.header.color, "black");
        // Background unchanged between themes
        assert_eq!(
            styles.container.background_color.as_deref(),
            Some("#99d6ff")
        );
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(theme_styles(&[])).unwrap();
        assert_eq!(json["container"]["backgroundColor"], "#99d6ff");
        assert_eq!(json["header"]["textAlign"], "center");
        assert!(json["header"].get("backgroundColor").is_none());
    }
}
