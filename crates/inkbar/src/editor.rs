//! The editor boundary.
//!
//! The toolbar never owns an editor. It holds a non-owning handle to
//! something implementing [`RichEditor`] and applies [`EditorCommand`]s to
//! it when buttons are tapped. The trait is the full formatting command
//! surface; `apply` dispatches a command value onto the matching method so
//! the toolbar's tap path stays a single call.

use tracing::trace;

use inkbar_core::logging::targets;

use crate::option::ToolbarOption;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

/// A formatting command the toolbar can apply to its editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Strip all formatting from the selection.
    RemoveFormat,
    Undo,
    Redo,
    ToggleBold,
    ToggleItalic,
    ToggleSubscript,
    ToggleSuperscript,
    ToggleStrikethrough,
    ToggleUnderline,
    /// Apply a header level (1-6).
    SetHeader(u8),
    Indent,
    Outdent,
    ToggleOrderedList,
    ToggleUnorderedList,
    Align(TextAlignment),
}

/// The formatting surface of a rich text editor.
///
/// Implementors own all editing state. The toolbar drives this trait through
/// [`RichEditor::apply`] and never inspects editor content.
pub trait RichEditor {
    fn remove_format(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);
    fn toggle_bold(&mut self);
    fn toggle_italic(&mut self);
    fn toggle_subscript(&mut self);
    fn toggle_superscript(&mut self);
    fn toggle_strikethrough(&mut self);
    fn toggle_underline(&mut self);
    fn set_header(&mut self, level: u8);
    fn indent(&mut self);
    fn outdent(&mut self);
    fn toggle_ordered_list(&mut self);
    fn toggle_unordered_list(&mut self);
    fn align(&mut self, alignment: TextAlignment);

    /// Options active at the caret or selection, for the toolbar's
    /// selection synchronizer. Editors that cannot report format state
    /// keep the default and leave every button unselected.
    fn active_options(&self) -> Vec<ToolbarOption> {
        Vec::new()
    }

    /// Dispatch a command value onto the matching method.
    fn apply(&mut self, command: EditorCommand) {
        trace!(target: targets::DISPATCH, ?command, "applying editor command");
        match command {
            EditorCommand::RemoveFormat => self.remove_format(),
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::ToggleBold => self.toggle_bold(),
            EditorCommand::ToggleItalic => self.toggle_italic(),
            EditorCommand::ToggleSubscript => self.toggle_subscript(),
            EditorCommand::ToggleSuperscript => self.toggle_superscript(),
            EditorCommand::ToggleStrikethrough => self.toggle_strikethrough(),
            EditorCommand::ToggleUnderline => self.toggle_underline(),
            EditorCommand::SetHeader(level) => self.set_header(level),
            EditorCommand::Indent => self.indent(),
            EditorCommand::Outdent => self.outdent(),
            EditorCommand::ToggleOrderedList => self.toggle_ordered_list(),
            EditorCommand::ToggleUnorderedList => self.toggle_unordered_list(),
            EditorCommand::Align(alignment) => self.align(alignment),
        }
    }
}
