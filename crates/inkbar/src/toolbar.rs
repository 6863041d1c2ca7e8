//! Editor toolbar implementation.
//!
//! This module provides [`EditorToolbar`], a horizontally scrollable strip of
//! option buttons for driving a rich text editor. Assigning a configuration
//! rebuilds the button sequence; the width engine then sizes the strip so
//! configurations wider than the visible frame scroll and narrower ones fill
//! it. A selection synchronizer mirrors the editor's active formats onto the
//! buttons without ever letting taps mutate selection locally.
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
//!     ToolbarOption::InsertLink,
//! ]);
//!
//! toolbar.option_triggered.connect(|&option| {
//!     println!("activated {option:?}");
//! });
//! toolbar.tap(0);
//! ```

use std::sync::Weak;

use inkbar_core::{PerfSpan, Signal};
use parking_lot::Mutex;
use tracing::{debug, trace};

use inkbar_core::logging::targets;

use crate::button::{ITEM_MARGIN, OptionButton};
use crate::delegate::ToolbarDelegate;
use crate::editor::RichEditor;
use crate::error::{Result, ToolbarError};
use crate::option::{OptionAction, ToolbarOption};
use crate::scroll::ScrollRegion;
use crate::types::{Color, Size};

// ============================================================================
// Layout Constants
// ============================================================================

/// Fixed width of the visual spacer appended after each button.
pub const SPACER_WIDTH: f32 = 8.0;

/// Fixed height of the toolbar strip regardless of content.
pub const BAR_HEIGHT: f32 = 44.0;

// ============================================================================
// Toolbar Item
// ============================================================================

/// One element of the rebuilt item sequence.
///
/// Spacers are purely visual separators with a fixed width. Only buttons
/// contribute to the content width the layout engine sums.
#[derive(Debug)]
pub enum ToolbarItem {
    /// A tappable button bound to one option.
    Button(OptionButton),
    /// A fixed gap of [`SPACER_WIDTH`] units.
    Spacer,
}

impl ToolbarItem {
    /// Returns `true` if this item is a button.
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button(_))
    }

    /// Returns `true` if this item is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer)
    }

    /// The contained button, if any.
    pub fn button(&self) -> Option<&OptionButton> {
        match self {
            Self::Button(button) => Some(button),
            Self::Spacer => None,
        }
    }
}

// ============================================================================
// Editor Toolbar
// ============================================================================

/// A configurable, scrollable action toolbar for a rich text editor.
///
/// The toolbar owns its buttons and scroll region. It holds its editor and
/// host delegate weakly; either collaborator may be dropped at any time, and
/// taps that would have reached it silently skip instead.
///
/// # Signals
///
/// - [`option_triggered`](Self::option_triggered) fires once per tap with the
///   activated option, after the action has been dispatched.
pub struct EditorToolbar {
    items: Vec<ToolbarItem>,
    options: Vec<ToolbarOption>,
    visible_width: f32,
    content_width: f32,
    container_size: Size,
    scroll: ScrollRegion,
    bar_tint_color: Option<Color>,
    editor: Option<Weak<Mutex<dyn RichEditor>>>,
    delegate: Option<Weak<dyn ToolbarDelegate>>,

    /// Emitted with the activated option on every tap.
    pub option_triggered: Signal<ToolbarOption>,
}

impl EditorToolbar {
    /// Create an empty toolbar with zero visible width.
    pub fn new() -> Self {
        let mut scroll = ScrollRegion::new();
        scroll.set_viewport(Size::new(0.0, BAR_HEIGHT));
        Self {
            items: Vec::new(),
            options: Vec::new(),
            visible_width: 0.0,
            content_width: 0.0,
            container_size: Size::new(ITEM_MARGIN, BAR_HEIGHT),
            scroll,
            bar_tint_color: None,
            editor: None,
            delegate: None,
            option_triggered: Signal::new(),
        }
    }

    /// Builder-style: set the visible width available to the toolbar.
    pub fn with_visible_width(mut self, width: f32) -> Self {
        self.set_visible_width(width);
        self
    }

    /// Builder-style: set the initial configuration.
    pub fn with_options(mut self, options: Vec<ToolbarOption>) -> Self {
        self.set_options(options);
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration, in display order.
    pub fn options(&self) -> &[ToolbarOption] {
        &self.options
    }

    /// Replace the configuration and rebuild the button sequence.
    ///
    /// Rebuild is non-incremental: the previous sequence is fully discarded
    /// even when the new configuration is equal to the old one. Selection
    /// state therefore resets to unselected until the next synchronization.
    pub fn set_options(&mut self, options: Vec<ToolbarOption>) {
        let _span = PerfSpan::new("toolbar_rebuild");
        self.items.clear();
        self.items.reserve(options.len() * 2);
        for option in &options {
            self.items.push(ToolbarItem::Button(OptionButton::new(*option)));
            self.items.push(ToolbarItem::Spacer);
        }
        self.options = options;
        debug!(
            target: targets::TOOLBAR,
            buttons = self.options.len(),
            "toolbar rebuilt"
        );
        self.relayout();
    }

    /// The rebuilt item sequence: one button per configured option, each
    /// followed by a spacer.
    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    /// The buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &OptionButton> {
        self.items.iter().filter_map(ToolbarItem::button)
    }

    /// Number of buttons in the current configuration.
    pub fn button_count(&self) -> usize {
        self.options.len()
    }

    /// The button at `index` in display order.
    pub fn button(&self, index: usize) -> Option<&OptionButton> {
        self.buttons().nth(index)
    }

    fn button_mut(&mut self, index: usize) -> Option<&mut OptionButton> {
        self.items
            .iter_mut()
            .filter_map(|item| match item {
                ToolbarItem::Button(button) => Some(button),
                ToolbarItem::Spacer => None,
            })
            .nth(index)
    }

    // =========================================================================
    // Width Layout
    // =========================================================================

    /// The width available to the toolbar in its host.
    pub fn visible_width(&self) -> f32 {
        self.visible_width
    }

    /// Set the visible width. Layout re-runs only when the value actually
    /// changes.
    pub fn set_visible_width(&mut self, width: f32) {
        let width = width.max(0.0);
        if width == self.visible_width {
            return;
        }
        self.visible_width = width;
        self.relayout();
    }

    /// Report a measured title width for the button at `index`, or clear it
    /// with `None`. Layout re-runs with the per-button fallback applied to
    /// any button still unmeasured.
    pub fn set_button_measured_width(&mut self, index: usize, width: Option<f32>) -> Result<()> {
        let count = self.button_count();
        let button = self
            .button_mut(index)
            .ok_or(ToolbarError::ButtonIndex { index, count })?;
        button.set_measured_width(width);
        self.relayout();
        Ok(())
    }

    /// Sum of all button slot widths. Spacers are visual only and do not
    /// contribute.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// The outer strip size: `max(visible, content) + margin` wide, fixed
    /// height.
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// The scroll region hosting the buttons.
    pub fn scroll(&self) -> &ScrollRegion {
        &self.scroll
    }

    /// Mutable access to the scroll region, for hosts driving the offset.
    pub fn scroll_mut(&mut self) -> &mut ScrollRegion {
        &mut self.scroll
    }

    fn relayout(&mut self) {
        self.content_width = self.buttons().map(OptionButton::slot_width).sum();
        let strip_width = self.content_width.max(self.visible_width);
        self.container_size = Size::new(strip_width + ITEM_MARGIN, BAR_HEIGHT);
        self.scroll.set_viewport(Size::new(self.visible_width, BAR_HEIGHT));
        self.scroll.set_content_width(self.content_width);
        trace!(
            target: targets::LAYOUT,
            content_width = self.content_width,
            visible_width = self.visible_width,
            container_width = self.container_size.width,
            scrollable = self.scroll.is_scrollable(),
            "toolbar laid out"
        );
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// The strip's tint color, if one was assigned.
    pub fn bar_tint_color(&self) -> Option<Color> {
        self.bar_tint_color
    }

    /// Set or clear the strip's tint color.
    pub fn set_bar_tint_color(&mut self, color: Option<Color>) {
        self.bar_tint_color = color;
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Attach the editor the toolbar drives. The handle is non-owning; a
    /// dropped editor turns editor commands into silent no-ops.
    pub fn set_editor(&mut self, editor: Weak<Mutex<dyn RichEditor>>) {
        self.editor = Some(editor);
    }

    /// Detach the editor.
    pub fn clear_editor(&mut self) {
        self.editor = None;
    }

    /// Attach the host delegate that receives escalated capabilities. The
    /// handle is non-owning; a dropped host disables escalation silently.
    pub fn set_delegate(&mut self, delegate: Weak<dyn ToolbarDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Detach the host delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // =========================================================================
    // Selection Synchronization
    // =========================================================================

    /// Mirror the editor's active formats onto the buttons.
    ///
    /// Exactly the buttons whose option appears in `active` become selected;
    /// all others become unselected. Unknown options in `active` are ignored.
    pub fn update_selected_items(&mut self, active: &[ToolbarOption]) {
        let mut selected = 0usize;
        for item in &mut self.items {
            if let ToolbarItem::Button(button) = item {
                let is_active = active.contains(&button.option());
                button.set_selected(is_active);
                if is_active {
                    selected += 1;
                }
            }
        }
        trace!(target: targets::TOOLBAR, selected, "selection synchronized");
    }

    /// Pull the active-options set from the attached editor and mirror it
    /// onto the buttons. A missing or dropped editor leaves selection
    /// untouched.
    pub fn sync_from_editor(&mut self) {
        let Some(editor) = self.editor.as_ref().and_then(Weak::upgrade) else {
            trace!(target: targets::DISPATCH, "no editor attached, skipping sync");
            return;
        };
        let active = editor.lock().active_options();
        self.update_selected_items(&active);
    }

    /// Options of the currently selected buttons, in display order.
    pub fn selected_options(&self) -> Vec<ToolbarOption> {
        self.buttons()
            .filter(|button| button.is_selected())
            .map(OptionButton::option)
            .collect()
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Tap the button at `index`.
    ///
    /// Emits the button's `clicked` signal, dispatches the bound option's
    /// action, then emits [`option_triggered`](Self::option_triggered).
    /// Dispatch to a dropped collaborator is silently skipped; selection
    /// state is never touched. An out-of-range index is a no-op.
    pub fn tap(&self, index: usize) {
        let _ = self.try_tap(index);
    }

    /// Tap the button at `index`, reporting an out-of-range index as an
    /// error instead of swallowing it.
    pub fn try_tap(&self, index: usize) -> Result<()> {
        let button = self.button(index).ok_or(ToolbarError::ButtonIndex {
            index,
            count: self.button_count(),
        })?;
        let option = button.option();
        button.tap();
        self.dispatch(option);
        self.option_triggered.emit(option);
        Ok(())
    }

    fn dispatch(&self, option: ToolbarOption) {
        match option.action() {
            OptionAction::Editor(command) => {
                let editor = self.editor.as_ref().and_then(Weak::upgrade);
                match editor {
                    Some(editor) => editor.lock().apply(command),
                    None => trace!(
                        target: targets::DISPATCH,
                        ?command,
                        "no editor attached, skipping command"
                    ),
                }
            }
            OptionAction::Host(capability) => {
                let delegate = self.delegate.as_ref().and_then(Weak::upgrade);
                match delegate {
                    Some(delegate) => delegate.handle(capability, self),
                    None => trace!(
                        target: targets::DISPATCH,
                        ?capability,
                        "no delegate attached, skipping escalation"
                    ),
                }
            }
        }
    }
}

impl Default for EditorToolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EditorToolbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorToolbar")
            .field("options", &self.options)
            .field("visible_width", &self.visible_width)
            .field("content_width", &self.content_width)
            .field("container_size", &self.container_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::button::{DEFAULT_ICON_WIDTH, SELECTED_BACKGROUND, UNSELECTED_BACKGROUND};
    use crate::editor::{EditorCommand, TextAlignment};

    #[derive(Default)]
    struct FakeEditor {
        commands: Vec<EditorCommand>,
        active: Vec<ToolbarOption>,
    }

    impl RichEditor for FakeEditor {
        fn remove_format(&mut self) {
            self.commands.push(EditorCommand::RemoveFormat);
        }
        fn undo(&mut self) {
            self.commands.push(EditorCommand::Undo);
        }
        fn redo(&mut self) {
            self.commands.push(EditorCommand::Redo);
        }
        fn toggle_bold(&mut self) {
            self.commands.push(EditorCommand::ToggleBold);
        }
        fn toggle_italic(&mut self) {
            self.commands.push(EditorCommand::ToggleItalic);
        }
        fn toggle_subscript(&mut self) {
            self.commands.push(EditorCommand::ToggleSubscript);
        }
        fn toggle_superscript(&mut self) {
            self.commands.push(EditorCommand::ToggleSuperscript);
        }
        fn toggle_strikethrough(&mut self) {
            self.commands.push(EditorCommand::ToggleStrikethrough);
        }
        fn toggle_underline(&mut self) {
            self.commands.push(EditorCommand::ToggleUnderline);
        }
        fn set_header(&mut self, level: u8) {
            self.commands.push(EditorCommand::SetHeader(level));
        }
        fn indent(&mut self) {
            self.commands.push(EditorCommand::Indent);
        }
        fn outdent(&mut self) {
            self.commands.push(EditorCommand::Outdent);
        }
        fn toggle_ordered_list(&mut self) {
            self.commands.push(EditorCommand::ToggleOrderedList);
        }
        fn toggle_unordered_list(&mut self) {
            self.commands.push(EditorCommand::ToggleUnorderedList);
        }
        fn align(&mut self, alignment: TextAlignment) {
            self.commands.push(EditorCommand::Align(alignment));
        }
        fn active_options(&self) -> Vec<ToolbarOption> {
            self.active.clone()
        }
    }

    struct CountingDelegate {
        escalations: AtomicU32,
    }

    impl ToolbarDelegate for CountingDelegate {
        fn insert_link(&self, _toolbar: &EditorToolbar) {
            self.escalations.fetch_add(1, Ordering::SeqCst);
        }
        fn change_text_color(&self, _toolbar: &EditorToolbar) {
            self.escalations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn attach_editor(toolbar: &mut EditorToolbar) -> Arc<Mutex<FakeEditor>> {
        let editor = Arc::new(Mutex::new(FakeEditor::default()));
        let handle: Arc<Mutex<dyn RichEditor>> = editor.clone();
        toolbar.set_editor(Arc::downgrade(&handle));
        editor
    }

    #[test]
    fn test_rebuild_yields_one_button_per_option_in_order() {
        let mut toolbar = EditorToolbar::new();
        let options = vec![
            ToolbarOption::Undo,
            ToolbarOption::Bold,
            ToolbarOption::Bold,
            ToolbarOption::InsertLink,
        ];
        toolbar.set_options(options.clone());
        let bound: Vec<_> = toolbar.buttons().map(OptionButton::option).collect();
        assert_eq!(bound, options);
        assert_eq!(toolbar.items().len(), 8);
        assert!(toolbar.items()[1].is_spacer());
    }

    #[test]
    fn test_empty_configuration_is_zero_width() {
        let mut toolbar = EditorToolbar::new().with_visible_width(0.0);
        toolbar.set_options(Vec::new());
        assert_eq!(toolbar.button_count(), 0);
        assert_eq!(toolbar.content_width(), 0.0);
        assert_eq!(toolbar.container_size(), Size::new(ITEM_MARGIN, BAR_HEIGHT));
        assert!(!toolbar.scroll().is_scrollable());
    }

    #[test]
    fn test_narrow_configuration_fills_visible_width() {
        // Two default-width buttons in a 100-unit frame.
        let mut toolbar = EditorToolbar::new().with_visible_width(100.0);
        toolbar.set_options(vec![ToolbarOption::Bold, ToolbarOption::Italic]);
        assert_eq!(toolbar.content_width(), 80.0);
        assert_eq!(toolbar.container_size(), Size::new(112.0, BAR_HEIGHT));
        assert!(!toolbar.scroll().is_scrollable());
    }

    #[test]
    fn test_wide_configuration_overflows_and_scrolls() {
        // Twenty default-width buttons in a 100-unit frame.
        let mut toolbar = EditorToolbar::new().with_visible_width(100.0);
        toolbar.set_options(vec![ToolbarOption::Bold; 20]);
        assert_eq!(toolbar.content_width(), 800.0);
        assert_eq!(toolbar.container_size(), Size::new(812.0, BAR_HEIGHT));
        assert_eq!(toolbar.scroll().content_width(), 800.0);
        assert!(toolbar.scroll().is_scrollable());
        assert_eq!(toolbar.scroll().max_scroll(), 700.0);
    }

    #[test]
    fn test_resize_reruns_layout() {
        let mut toolbar = EditorToolbar::new().with_visible_width(100.0);
        toolbar.set_options(vec![ToolbarOption::Bold; 20]);
        assert!(toolbar.scroll().is_scrollable());
        toolbar.set_visible_width(1000.0);
        assert_eq!(toolbar.container_size().width, 1012.0);
        assert!(!toolbar.scroll().is_scrollable());
    }

    #[test]
    fn test_measured_width_applies_per_button() {
        let mut toolbar = EditorToolbar::new().with_visible_width(100.0);
        toolbar.set_options(vec![ToolbarOption::Undo, ToolbarOption::Redo]);
        toolbar.set_button_measured_width(0, Some(50.0)).unwrap();
        // First button measured, second falls back independently.
        assert_eq!(
            toolbar.content_width(),
            (50.0 + ITEM_MARGIN) + (DEFAULT_ICON_WIDTH + ITEM_MARGIN)
        );
        assert_eq!(
            toolbar.set_button_measured_width(5, Some(10.0)),
            Err(ToolbarError::ButtonIndex { index: 5, count: 2 })
        );
    }

    #[test]
    fn test_selection_synchronization_is_exact() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![
            ToolbarOption::OrderedList,
            ToolbarOption::UnorderedList,
        ]);
        toolbar.update_selected_items(&[ToolbarOption::OrderedList]);

        let ordered = toolbar.button(0).unwrap();
        let unordered = toolbar.button(1).unwrap();
        assert!(ordered.is_selected());
        assert_eq!(ordered.background(), SELECTED_BACKGROUND);
        assert!(!unordered.is_selected());
        assert_eq!(unordered.background(), UNSELECTED_BACKGROUND);

        toolbar.update_selected_items(&[]);
        assert!(toolbar.selected_options().is_empty());
    }

    #[test]
    fn test_duplicate_options_select_together() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![
            ToolbarOption::Bold,
            ToolbarOption::Italic,
            ToolbarOption::Bold,
        ]);
        toolbar.update_selected_items(&[ToolbarOption::Bold]);
        assert_eq!(
            toolbar.selected_options(),
            vec![ToolbarOption::Bold, ToolbarOption::Bold]
        );
    }

    #[test]
    fn test_rebuild_resets_selection() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold]);
        toolbar.update_selected_items(&[ToolbarOption::Bold]);
        toolbar.set_options(vec![ToolbarOption::Bold]);
        assert!(toolbar.selected_options().is_empty());
    }

    #[test]
    fn test_sync_from_editor_mirrors_active_options() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold, ToolbarOption::Italic]);
        let editor = attach_editor(&mut toolbar);
        editor.lock().active = vec![ToolbarOption::Italic];

        toolbar.sync_from_editor();
        assert_eq!(toolbar.selected_options(), vec![ToolbarOption::Italic]);

        // Dropping the editor leaves the last synchronized state in place.
        drop(editor);
        toolbar.sync_from_editor();
        assert_eq!(toolbar.selected_options(), vec![ToolbarOption::Italic]);
    }

    #[test]
    fn test_tap_dispatches_editor_command() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold, ToolbarOption::Header(2)]);
        let editor = attach_editor(&mut toolbar);

        toolbar.tap(0);
        toolbar.tap(1);
        assert_eq!(
            editor.lock().commands,
            vec![EditorCommand::ToggleBold, EditorCommand::SetHeader(2)]
        );
    }

    #[test]
    fn test_tap_escalates_to_delegate() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::InsertLink, ToolbarOption::TextColor]);
        let delegate = Arc::new(CountingDelegate {
            escalations: AtomicU32::new(0),
        });
        let handle: Arc<dyn ToolbarDelegate> = delegate.clone();
        toolbar.set_delegate(Arc::downgrade(&handle));

        toolbar.tap(0);
        toolbar.tap(1);
        assert_eq!(delegate.escalations.load(Ordering::SeqCst), 2);
        drop(handle);
    }

    #[test]
    fn test_tap_without_collaborators_is_silent() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold, ToolbarOption::InsertImage]);
        // No editor, no delegate. Both taps still trigger the signal.
        let triggers = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&triggers);
        toolbar.option_triggered.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        toolbar.tap(0);
        toolbar.tap(1);
        assert_eq!(triggers.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tap_after_editor_dropped_is_silent() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold]);
        {
            let editor: Arc<Mutex<dyn RichEditor>> =
                Arc::new(Mutex::new(FakeEditor::default()));
            toolbar.set_editor(Arc::downgrade(&editor));
        }
        toolbar.tap(0);
        assert!(toolbar.try_tap(0).is_ok());
    }

    #[test]
    fn test_tap_never_changes_selection() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold]);
        let _editor = attach_editor(&mut toolbar);

        toolbar.tap(0);
        assert!(!toolbar.button(0).unwrap().is_selected());

        toolbar.update_selected_items(&[ToolbarOption::Bold]);
        toolbar.tap(0);
        assert!(toolbar.button(0).unwrap().is_selected());
    }

    #[test]
    fn test_tap_emits_exactly_one_trigger() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Undo]);
        let triggered = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&triggered);
        toolbar.option_triggered.connect(move |&option| {
            assert_eq!(option, ToolbarOption::Undo);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        toolbar.tap(0);
        assert_eq!(triggered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_out_of_range_tap() {
        let mut toolbar = EditorToolbar::new();
        toolbar.set_options(vec![ToolbarOption::Bold]);
        toolbar.tap(7);
        assert_eq!(
            toolbar.try_tap(7),
            Err(ToolbarError::ButtonIndex { index: 7, count: 1 })
        );
    }
}
