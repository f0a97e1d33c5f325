//! One-time page decorations applied at bootstrap.

use crate::surface::Surface;

/// Class of the button appended to code blocks.
pub const COPY_BUTTON_CLASS: &str = "copy-code-btn";
/// Class added to the main content region.
pub const FADE_IN_CLASS: &str = "fade-in";

/// Whether `href` points off-site: it starts with `http` and does not
/// mention the page's hostname.
pub fn is_external_link(href: &str, hostname: &str) -> bool {
    href.starts_with("http") && (hostname.is_empty() || !href.contains(hostname))
}

/// Open an external link in a new tab without leaking the referrer.
pub fn mark_external<E: Surface>(link: &E) {
    link.set_attribute("target", "_blank");
    link.set_attribute("rel", "noopener noreferrer");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_external_link_detection() {
        assert!(is_external_link("https://github.com/rust-lang", "blog.example.com"));
        assert!(!is_external_link("https://blog.example.com/about", "blog.example.com"));
        assert!(!is_external_link("/posts/hello", "blog.example.com"));
        assert!(!is_external_link("#top", "blog.example.com"));
        assert!(is_external_link("http://example.org", ""));
    }

    #[test]
    fn test_mark_external() {
        let link = MemorySurface::new();
        mark_external(&link);
        assert_eq!(link.attribute("target").as_deref(), Some("_blank"));
        assert_eq!(link.attribute("rel").as_deref(), Some("noopener noreferrer"));
    }
}
