//! Inkbar - a configurable action toolbar for rich text editors.
//!
//! Inkbar models the formatting toolbar that sits above a rich text editor:
//! an ordered configuration of [`ToolbarOption`]s is rebuilt into a
//! horizontally scrollable strip of [`OptionButton`]s, sized by a width
//! engine and kept in sync with the formats active at the editor's caret.
//! The toolbar drives its editor through the [`RichEditor`] trait and
//! escalates picker-style options to a host [`ToolbarDelegate`], holding
//! both collaborators weakly.
//!
//! # Example
//!
//! ```
//! use inkbar::{EditorToolbar, ToolbarOption};
//!
//! let mut toolbar = EditorToolbar::new().with_visible_width(320.0);
//! toolbar.set_options(vec![
//!     ToolbarOption::Bold,
//!     ToolbarOption::Italic,
//!     ToolbarOption::OrderedList,
//! ]);
//!
//! // Mirror the editor's caret state onto the buttons.
//! toolbar.update_selected_items(&[ToolbarOption::Bold]);
//! assert!(toolbar.button(0).unwrap().is_selected());
//! ```

pub mod button;
pub mod delegate;
pub mod editor;
mod error;
pub mod icon;
pub mod option;
pub mod scroll;
pub mod toolbar;
pub mod types;

pub use button::{DEFAULT_ICON_WIDTH, ITEM_MARGIN, OptionButton};
pub use delegate::{HostCapability, ToolbarDelegate};
pub use editor::{EditorCommand, RichEditor, TextAlignment};
pub use error::{Result, ToolbarError};
pub use icon::Icon;
pub use option::{OptionAction, ToolbarOption};
pub use scroll::ScrollRegion;
pub use toolbar::{BAR_HEIGHT, EditorToolbar, SPACER_WIDTH, ToolbarItem};
pub use types::{Color, Point, Rect, Size};
