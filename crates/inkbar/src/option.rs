//! The toolbar option registry.
//!
//! This module provides [`ToolbarOption`], the closed set of actions a
//! toolbar can display, together with each option's static metadata: title,
//! icon references, and the action it performs when activated.
//!
//! Per-option behavior is a tagged variant, [`OptionAction`]: an option either
//! carries an [`EditorCommand`] applied directly to the editor collaborator,
//! or names a [`HostCapability`] that escalates to the host delegate (color
//! pickers, file pickers, link prompts). The builder dispatches on the tag;
//! there are no optional function values with implicit fallback.
//!
//! Options are compared by variant identity, never by title. The same option
//! may appear more than once in a configuration and renders as distinct
//! buttons.

use crate::delegate::HostCapability;
use crate::editor::{EditorCommand, TextAlignment};
use crate::icon::Icon;

/// One entry in the closed set of recognized toolbar actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarOption {
    /// Remove all formatting from the selection.
    Clear,
    /// Undo the last edit.
    Undo,
    /// Redo the last undone edit.
    Redo,
    /// Toggle bold.
    Bold,
    /// Toggle italic.
    Italic,
    /// Toggle subscript.
    Subscript,
    /// Toggle superscript.
    Superscript,
    /// Toggle strikethrough.
    Strikethrough,
    /// Toggle underline.
    Underline,
    /// Pick a text (foreground) color. Escalates to the host.
    TextColor,
    /// Pick a text background color. Escalates to the host.
    BackgroundColor,
    /// Apply a header level (1-6).
    Header(u8),
    /// Increase indentation.
    Indent,
    /// Decrease indentation.
    Outdent,
    /// Toggle an ordered (numbered) list.
    OrderedList,
    /// Toggle an unordered (bullet) list.
    UnorderedList,
    /// Align text left.
    AlignLeft,
    /// Align text center.
    AlignCenter,
    /// Align text right.
    AlignRight,
    /// Insert an image. Escalates to the host.
    InsertImage,
    /// Insert a link. Escalates to the host.
    InsertLink,
}

/// What activating an option does.
///
/// The two variants mirror the two collaborators at the toolbar boundary:
/// editor commands go to the [`RichEditor`](crate::editor::RichEditor),
/// host capabilities go to the [`ToolbarDelegate`](crate::delegate::ToolbarDelegate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    /// Apply a formatting command to the editor collaborator.
    Editor(EditorCommand),
    /// Escalate to the host delegate for UI the toolbar cannot provide.
    Host(HostCapability),
}

impl ToolbarOption {
    /// The option's human-readable title.
    pub fn title(&self) -> String {
        match self {
            Self::Clear => "Clear".to_string(),
            Self::Undo => "Undo".to_string(),
            Self::Redo => "Redo".to_string(),
            Self::Bold => "Bold".to_string(),
            Self::Italic => "Italic".to_string(),
            Self::Subscript => "Sub".to_string(),
            Self::Superscript => "Super".to_string(),
            Self::Strikethrough => "Strike".to_string(),
            Self::Underline => "Underline".to_string(),
            Self::TextColor => "Color".to_string(),
            Self::BackgroundColor => "BG Color".to_string(),
            Self::Header(level) => format!("H{level}"),
            Self::Indent => "Indent".to_string(),
            Self::Outdent => "Outdent".to_string(),
            Self::OrderedList => "Ordered List".to_string(),
            Self::UnorderedList => "Unordered List".to_string(),
            Self::AlignLeft => "Left".to_string(),
            Self::AlignCenter => "Center".to_string(),
            Self::AlignRight => "Right".to_string(),
            Self::InsertImage => "Image".to_string(),
            Self::InsertLink => "Link".to_string(),
        }
    }

    /// Base name of the option's icon in the host icon set.
    fn icon_name(&self) -> String {
        match self {
            Self::Clear => "clear".to_string(),
            Self::Undo => "undo".to_string(),
            Self::Redo => "redo".to_string(),
            Self::Bold => "bold".to_string(),
            Self::Italic => "italic".to_string(),
            Self::Subscript => "subscript".to_string(),
            Self::Superscript => "superscript".to_string(),
            Self::Strikethrough => "strikethrough".to_string(),
            Self::Underline => "underline".to_string(),
            Self::TextColor => "text-color".to_string(),
            Self::BackgroundColor => "bg-color".to_string(),
            Self::Header(level) => format!("h{level}"),
            Self::Indent => "indent".to_string(),
            Self::Outdent => "outdent".to_string(),
            Self::OrderedList => "ordered-list".to_string(),
            Self::UnorderedList => "unordered-list".to_string(),
            Self::AlignLeft => "align-left".to_string(),
            Self::AlignCenter => "align-center".to_string(),
            Self::AlignRight => "align-right".to_string(),
            Self::InsertImage => "insert-image".to_string(),
            Self::InsertLink => "insert-link".to_string(),
        }
    }

    /// The option's icon reference.
    pub fn icon(&self) -> Option<Icon> {
        Some(Icon::named(self.icon_name()))
    }

    /// The icon shown while the option is selected, for options that reflect
    /// editor state. Momentary options (undo, picks, inserts) have none.
    pub fn selected_icon(&self) -> Option<Icon> {
        if self.is_stateful() {
            Some(Icon::named(format!("{}-selected", self.icon_name())))
        } else {
            None
        }
    }

    /// Whether the option reflects a persistent formatting state that the
    /// editor can report as active at the caret.
    pub fn is_stateful(&self) -> bool {
        matches!(
            self,
            Self::Bold
                | Self::Italic
                | Self::Subscript
                | Self::Superscript
                | Self::Strikethrough
                | Self::Underline
                | Self::Header(_)
                | Self::OrderedList
                | Self::UnorderedList
                | Self::AlignLeft
                | Self::AlignCenter
                | Self::AlignRight
        )
    }

    /// The action performed when a button bound to this option is tapped.
    pub fn action(&self) -> OptionAction {
        match self {
            Self::Clear => OptionAction::Editor(EditorCommand::RemoveFormat),
            Self::Undo => OptionAction::Editor(EditorCommand::Undo),
            Self::Redo => OptionAction::Editor(EditorCommand::Redo),
            Self::Bold => OptionAction::Editor(EditorCommand::ToggleBold),
            Self::Italic => OptionAction::Editor(EditorCommand::ToggleItalic),
            Self::Subscript => OptionAction::Editor(EditorCommand::ToggleSubscript),
            Self::Superscript => OptionAction::Editor(EditorCommand::ToggleSuperscript),
            Self::Strikethrough => OptionAction::Editor(EditorCommand::ToggleStrikethrough),
            Self::Underline => OptionAction::Editor(EditorCommand::ToggleUnderline),
            Self::TextColor => OptionAction::Host(HostCapability::TextColor),
            Self::BackgroundColor => OptionAction::Host(HostCapability::BackgroundColor),
            Self::Header(level) => OptionAction::Editor(EditorCommand::SetHeader(*level)),
            Self::Indent => OptionAction::Editor(EditorCommand::Indent),
            Self::Outdent => OptionAction::Editor(EditorCommand::Outdent),
            Self::OrderedList => OptionAction::Editor(EditorCommand::ToggleOrderedList),
            Self::UnorderedList => OptionAction::Editor(EditorCommand::ToggleUnorderedList),
            Self::AlignLeft => OptionAction::Editor(EditorCommand::Align(TextAlignment::Left)),
            Self::AlignCenter => OptionAction::Editor(EditorCommand::Align(TextAlignment::Center)),
            Self::AlignRight => OptionAction::Editor(EditorCommand::Align(TextAlignment::Right)),
            Self::InsertImage => OptionAction::Host(HostCapability::InsertImage),
            Self::InsertLink => OptionAction::Host(HostCapability::InsertLink),
        }
    }

    /// The full default option set, in conventional display order.
    ///
    /// Hosts that want the everything-on toolbar can assign this directly;
    /// most assign a subset.
    pub fn default_set() -> Vec<ToolbarOption> {
        vec![
            Self::Clear,
            Self::Undo,
            Self::Redo,
            Self::Bold,
            Self::Italic,
            Self::Subscript,
            Self::Superscript,
            Self::Strikethrough,
            Self::Underline,
            Self::TextColor,
            Self::BackgroundColor,
            Self::Header(1),
            Self::Header(2),
            Self::Header(3),
            Self::Header(4),
            Self::Header(5),
            Self::Header(6),
            Self::Indent,
            Self::Outdent,
            Self::OrderedList,
            Self::UnorderedList,
            Self::AlignLeft,
            Self::AlignCenter,
            Self::AlignRight,
            Self::InsertImage,
            Self::InsertLink,
        ]
    }
}

static_assertions::assert_impl_all!(ToolbarOption: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_compare_by_variant() {
        assert_eq!(ToolbarOption::Bold, ToolbarOption::Bold);
        assert_ne!(ToolbarOption::Bold, ToolbarOption::Italic);
        assert_ne!(ToolbarOption::Header(1), ToolbarOption::Header(2));
    }

    #[test]
    fn test_editor_options_carry_commands() {
        assert_eq!(
            ToolbarOption::Bold.action(),
            OptionAction::Editor(EditorCommand::ToggleBold)
        );
        assert_eq!(
            ToolbarOption::Header(3).action(),
            OptionAction::Editor(EditorCommand::SetHeader(3))
        );
        assert_eq!(
            ToolbarOption::AlignCenter.action(),
            OptionAction::Editor(EditorCommand::Align(TextAlignment::Center))
        );
    }

    #[test]
    fn test_host_options_carry_capabilities() {
        for (option, capability) in [
            (ToolbarOption::TextColor, HostCapability::TextColor),
            (ToolbarOption::BackgroundColor, HostCapability::BackgroundColor),
            (ToolbarOption::InsertImage, HostCapability::InsertImage),
            (ToolbarOption::InsertLink, HostCapability::InsertLink),
        ] {
            assert_eq!(option.action(), OptionAction::Host(capability));
        }
    }

    #[test]
    fn test_stateful_options_have_selected_icons() {
        assert!(ToolbarOption::Bold.selected_icon().is_some());
        assert!(ToolbarOption::OrderedList.selected_icon().is_some());
        assert!(ToolbarOption::Undo.selected_icon().is_none());
        assert!(ToolbarOption::InsertLink.selected_icon().is_none());
    }

    #[test]
    fn test_header_title() {
        assert_eq!(ToolbarOption::Header(2).title(), "H2");
        assert_eq!(ToolbarOption::Header(2).icon().unwrap().name(), "h2");
    }

    #[test]
    fn test_default_set_has_every_header_level() {
        let set = ToolbarOption::default_set();
        for level in 1..=6 {
            assert!(set.contains(&ToolbarOption::Header(level)));
        }
    }
}
