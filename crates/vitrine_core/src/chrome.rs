//! Process-wide page chrome configuration
//!
//! Scrollbar styling and the shared accent palette are page-global and
//! single-assignment: installed once at application start, read-only
//! afterwards. Individual scenes and components never write here.

use std::sync::OnceLock;

use crate::color::Color;

static PAGE_CHROME: OnceLock<PageChrome> = OnceLock::new();

/// Scrollbar styling applied to the document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarStyle {
    /// Scrollbar width in pixels
    pub width: f32,
    /// Track color
    pub track: Color,
    /// Thumb color
    pub thumb: Color,
    /// Thumb color while hovered
    pub thumb_hover: Color,
    /// Thumb corner radius in pixels
    pub radius: f32,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            width: 6.0,
            track: Color::from_hex(0x1a1a1a),
            thumb: Color::from_hex(0x00ff6a),
            thumb_hover: Color::from_hex(0x00cc55),
            radius: 3.0,
        }
    }
}

/// The page-global chrome: scrollbar plus the shared color palette
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageChrome {
    pub scrollbar: ScrollbarStyle,
    /// Accent color for highlights, fill indicators, and glows
    pub accent: Color,
    /// Color of de-emphasized (dimmed) titles
    pub dim: Color,
    /// Resting title color
    pub resting: Color,
    /// Backdrop tint used by the intro splash
    pub splash_tint: Color,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            scrollbar: ScrollbarStyle::default(),
            accent: Color::from_hex(0x00ff6a),
            dim: Color::from_hex(0x666666),
            resting: Color::from_hex(0xd1d5db),
            splash_tint: Color::from_hex(0x1e3a8a),
        }
    }
}

/// Install the page chrome
///
/// This should be called once at app startup, before any scene reads the
/// chrome. If no chrome is installed, readers see `PageChrome::default()`.
///
/// # Panics
///
/// Panics if called more than once, or after a reader has already
/// materialized the default.
pub fn install_page_chrome(chrome: PageChrome) {
    if PAGE_CHROME.set(chrome).is_err() {
        panic!("install_page_chrome() called after the page chrome was already set");
    }
}

/// Get the page chrome, materializing defaults if none was installed
pub fn page_chrome() -> &'static PageChrome {
    PAGE_CHROME.get_or_init(PageChrome::default)
}

/// Get the page chrome only if one was explicitly installed or read
pub fn try_page_chrome() -> Option<&'static PageChrome> {
    PAGE_CHROME.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let chrome = PageChrome::default();
        assert_eq!(chrome.accent, Color::from_hex(0x00ff6a));
        assert_eq!(chrome.scrollbar.thumb, chrome.accent);
        assert_eq!(chrome.dim, Color::from_hex(0x666666));
    }

    #[test]
    fn test_page_chrome_reads_default() {
        // Reading without installing materializes defaults
        let chrome = page_chrome();
        assert_eq!(chrome.scrollbar.width, 6.0);
    }
}
