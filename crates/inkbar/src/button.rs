//! Action button implementation.
//!
//! This module provides [`OptionButton`], the per-option button the toolbar
//! builder materializes from a configuration. Each button binds exactly one
//! [`ToolbarOption`], renders its title and icon, and carries a selected flag
//! the synchronizer drives from editor state.
//!
//! # Example
//!
//! ```
//! use inkbar::{OptionButton, ToolbarOption};
//!
//! let button = OptionButton::new(ToolbarOption::Bold);
//! button.clicked.connect(|_| {
//!     println!("bold tapped");
//! });
//! assert!(!button.is_selected());
//! ```

use inkbar_core::Signal;
use tracing::trace;

use inkbar_core::logging::targets;

use crate::icon::Icon;
use crate::option::ToolbarOption;
use crate::types::{Color, Size};

// ============================================================================
// Layout Constants
// ============================================================================

/// Fallback content width for buttons that cannot measure their rendered
/// title, in layout units.
pub const DEFAULT_ICON_WIDTH: f32 = 28.0;

/// Horizontal padding added around every button's content, in layout units.
pub const ITEM_MARGIN: f32 = 12.0;

/// Background of a button whose option is active at the caret.
pub const SELECTED_BACKGROUND: Color = Color::from_rgb8(204, 227, 255);

/// Background of a button whose option is not active.
pub const UNSELECTED_BACKGROUND: Color = Color::WHITE;

// ============================================================================
// Option Button
// ============================================================================

/// A toolbar button bound to a single [`ToolbarOption`].
///
/// Buttons are dumb: they hold presentation state and emit [`clicked`]
/// (`OptionButton::clicked`). Activation semantics live in the toolbar,
/// which resolves the bound option's action on tap.
pub struct OptionButton {
    option: ToolbarOption,
    title: String,
    icon: Option<Icon>,
    selected_icon: Option<Icon>,
    selected: bool,
    background: Color,
    measured_width: Option<f32>,

    /// Emitted when the button is tapped.
    pub clicked: Signal<()>,
}

impl OptionButton {
    /// Create a button bound to `option`, unselected, with the option's
    /// static title and icons.
    pub fn new(option: ToolbarOption) -> Self {
        Self {
            title: option.title(),
            icon: option.icon(),
            selected_icon: option.selected_icon(),
            option,
            selected: false,
            background: UNSELECTED_BACKGROUND,
            clicked: Signal::new(),
            measured_width: None,
        }
    }

    /// Builder-style: set the measured width of the rendered title.
    pub fn with_measured_width(mut self, width: f32) -> Self {
        self.measured_width = Some(width);
        self
    }

    /// The option this button activates.
    pub fn option(&self) -> ToolbarOption {
        self.option
    }

    /// The button's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The button's normal icon.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// The icon shown while selected, if the option has one.
    pub fn selected_icon(&self) -> Option<&Icon> {
        self.selected_icon.as_ref()
    }

    /// Whether the bound option is active at the caret.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selected flag and update the background to match.
    ///
    /// Only the synchronizer calls this; tapping a button never does.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.background = if selected {
            SELECTED_BACKGROUND
        } else {
            UNSELECTED_BACKGROUND
        };
        trace!(
            target: targets::TOOLBAR,
            option = ?self.option,
            selected,
            "button selection changed"
        );
    }

    /// Current background color, derived from the selected flag.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Report the measured width of the rendered title, or clear it with
    /// `None` to fall back to the default content width.
    pub fn set_measured_width(&mut self, width: Option<f32>) {
        self.measured_width = width;
    }

    /// The measured title width, if the host reported one.
    pub fn measured_width(&self) -> Option<f32> {
        self.measured_width
    }

    /// Content width used by layout: the measured title width when present,
    /// otherwise [`DEFAULT_ICON_WIDTH`]. Falls back per button, never
    /// globally.
    pub fn content_width(&self) -> f32 {
        self.measured_width.unwrap_or(DEFAULT_ICON_WIDTH)
    }

    /// Full horizontal slot the button occupies: content plus margin.
    pub fn slot_width(&self) -> f32 {
        self.content_width() + ITEM_MARGIN
    }

    /// The slot the button occupies, at toolbar height.
    pub fn slot_size(&self, bar_height: f32) -> Size {
        Size::new(self.slot_width(), bar_height)
    }

    /// Simulate a tap. Emits [`clicked`](Self::clicked) and nothing else;
    /// selection state is untouched.
    pub fn tap(&self) {
        self.clicked.emit(());
    }
}

impl std::fmt::Debug for OptionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionButton")
            .field("option", &self.option)
            .field("selected", &self.selected)
            .field("measured_width", &self.measured_width)
            .finish()
    }
}

static_assertions::assert_impl_all!(OptionButton: Send, Sync);
