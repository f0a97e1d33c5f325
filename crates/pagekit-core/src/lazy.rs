//! Deferred image loading.

use crate::{config::LazyImageConfig, surface::Surface};

/// Swaps deferred sources into place.
#[derive(Debug, Clone)]
pub struct LazyImages {
    source_attribute: String,
    loaded_class: String,
}

impl LazyImages {
    pub fn new(config: &LazyImageConfig) -> Self {
        Self {
            source_attribute: config.source_attribute.clone(),
            loaded_class: config.loaded_class.clone(),
        }
    }

    /// Attribute marking an image as deferred.
    pub fn source_attribute(&self) -> &str {
        &self.source_attribute
    }

    /// CSS selector for deferred images.
    pub fn selector(&self) -> String {
        format!("img[{}]", self.source_attribute)
    }

    /// Load `image` if it still carries a deferred source.
    ///
    /// Returns false when there was nothing to load, so repeated
    /// intersection signals never reload an image.
    pub fn reveal<E: Surface>(&self, image: &E) -> bool {
        let Some(source) = image
            .attribute(&self.source_attribute)
            .filter(|source| !source.is_empty())
        else {
            return false;
        };

        image.set_attribute("src", &source);
        image.remove_attribute(&self.source_attribute);
        image.add_class(&self.loaded_class);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_reveal_swaps_source_once() {
        let lazy = LazyImages::new(&LazyImageConfig::default());
        let image = MemorySurface::with_attributes([("data-src", "/img/cover.webp")]);

        assert!(lazy.reveal(&image));
        assert_eq!(image.attribute("src").as_deref(), Some("/img/cover.webp"));
        assert_eq!(image.attribute("data-src"), None);
        assert!(image.has_class("loaded"));

        image.set_attribute("src", "/img/replaced.webp");
        assert!(!lazy.reveal(&image));
        assert_eq!(image.attribute("src").as_deref(), Some("/img/replaced.webp"));
    }

    #[test]
    fn test_unrevealed_image_keeps_marker() {
        let lazy = LazyImages::new(&LazyImageConfig::default());
        let image = MemorySurface::with_attributes([("data-src", "/img/a.png")]);

        assert_eq!(image.attribute("data-src").as_deref(), Some("/img/a.png"));
        assert_eq!(image.attribute("src"), None);
        assert!(!image.has_class("loaded"));
        assert_eq!(lazy.selector(), "img[data-src]");
    }

    #[test]
    fn test_empty_source_is_skipped() {
        let lazy = LazyImages::new(&LazyImageConfig::default());
        let image = MemorySurface::with_attributes([("data-src", "")]);

        assert!(!lazy.reveal(&image));
        assert!(!image.has_class("loaded"));
    }
}
