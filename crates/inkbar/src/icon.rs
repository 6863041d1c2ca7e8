//! Icon descriptors for toolbar buttons.
//!
//! The toolbar model never decodes or rasterizes image data. An [`Icon`] is a
//! named reference into the host's icon set, optionally carrying the intrinsic
//! size the host reports for it. The layout engine uses the intrinsic size of
//! a measured button; buttons without one fall back to the default icon width.

use crate::types::Size;

/// A named reference to a host-provided icon.
///
/// # Example
///
/// ```
/// use inkbar::{Icon, Size};
///
/// let plain = Icon::named("bold");
/// assert!(plain.size().is_none());
///
/// let sized = Icon::named("bold").with_size(Size::new(24.0, 24.0));
/// assert_eq!(sized.size().unwrap().width, 24.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    name: String,
    size: Option<Size>,
}

impl Icon {
    /// Create an icon reference with no intrinsic size.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    /// Set the intrinsic size using builder pattern.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// The icon's name in the host icon set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The intrinsic size reported by the host, if any.
    pub fn size(&self) -> Option<Size> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_named() {
        let icon = Icon::named("italic");
        assert_eq!(icon.name(), "italic");
        assert!(icon.size().is_none());
    }

    #[test]
    fn test_icon_with_size() {
        let icon = Icon::named("undo").with_size(Size::new(28.0, 28.0));
        assert_eq!(icon.size(), Some(Size::new(28.0, 28.0)));
    }
}
