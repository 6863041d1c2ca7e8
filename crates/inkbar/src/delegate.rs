//! The host delegate boundary.
//!
//! Some options need UI the toolbar cannot provide: color pickers, file
//! pickers, link entry. Those options name a [`HostCapability`], and the
//! toolbar forwards activation to the host's [`ToolbarDelegate`]. Every
//! method has a default no-op body so hosts implement only the capabilities
//! they surface in their configuration.

use crate::toolbar::EditorToolbar;

/// Option behavior that escalates to the host rather than the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCapability {
    /// Present a foreground color picker.
    TextColor,
    /// Present a background color picker.
    BackgroundColor,
    /// Present an image picker or prompt.
    InsertImage,
    /// Present a link prompt.
    InsertLink,
}

/// Receives escalated option activations from a toolbar.
///
/// The toolbar holds delegates weakly. Dropping the host silently disables
/// escalation without tearing down the toolbar.
pub trait ToolbarDelegate {
    /// The text color option was activated.
    fn change_text_color(&self, _toolbar: &EditorToolbar) {}

    /// The background color option was activated.
    fn change_background_color(&self, _toolbar: &EditorToolbar) {}

    /// The insert image option was activated.
    fn insert_image(&self, _toolbar: &EditorToolbar) {}

    /// The insert link option was activated.
    fn insert_link(&self, _toolbar: &EditorToolbar) {}

    /// Route a capability to its handler method.
    fn handle(&self, capability: HostCapability, toolbar: &EditorToolbar) {
        match capability {
            HostCapability::TextColor => self.change_text_color(toolbar),
            HostCapability::BackgroundColor => self.change_background_color(toolbar),
            HostCapability::InsertImage => self.insert_image(toolbar),
            HostCapability::InsertLink => self.insert_link(toolbar),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct PartialHost {
        links: RefCell<u32>,
    }

    impl ToolbarDelegate for PartialHost {
        fn insert_link(&self, _toolbar: &EditorToolbar) {
            *self.links.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_unimplemented_capabilities_are_no_ops() {
        let host = PartialHost { links: RefCell::new(0) };
        let toolbar = EditorToolbar::new();
        host.handle(HostCapability::TextColor, &toolbar);
        host.handle(HostCapability::InsertImage, &toolbar);
        assert_eq!(*host.links.borrow(), 0);
        host.handle(HostCapability::InsertLink, &toolbar);
        assert_eq!(*host.links.borrow(), 1);
    }
}
