//! Console walkthrough of the toolbar lifecycle.
//!
//! Builds a toolbar, attaches a logging editor and delegate, then exercises
//! configuration, layout, selection sync, and taps. Run with:
//!
//! ```sh
//! cargo run --example toolbar_walkthrough
//! ```

use std::sync::Arc;

use inkbar::{EditorToolbar, RichEditor, TextAlignment, ToolbarDelegate, ToolbarOption};
use parking_lot::Mutex;

struct ConsoleEditor;

impl RichEditor for ConsoleEditor {
    fn remove_format(&mut self) {
        println!("editor: remove format");
    }
    fn undo(&mut self) {
        println!("editor: undo");
    }
    fn redo(&mut self) {
        println!("editor: redo");
    }
    fn toggle_bold(&mut self) {
        println!("editor: toggle bold");
    }
    fn toggle_italic(&mut self) {
        println!("editor: toggle italic");
    }
    fn toggle_subscript(&mut self) {
        println!("editor: toggle subscript");
    }
    fn toggle_superscript(&mut self) {
        println!("editor: toggle superscript");
    }
    fn toggle_strikethrough(&mut self) {
        println!("editor: toggle strikethrough");
    }
    fn toggle_underline(&mut self) {
        println!("editor: toggle underline");
    }
    fn set_header(&mut self, level: u8) {
        println!("editor: header {level}");
    }
    fn indent(&mut self) {
        println!("editor: indent");
    }
    fn outdent(&mut self) {
        println!("editor: outdent");
    }
    fn toggle_ordered_list(&mut self) {
        println!("editor: toggle ordered list");
    }
    fn toggle_unordered_list(&mut self) {
        println!("editor: toggle unordered list");
    }
    fn align(&mut self, alignment: TextAlignment) {
        println!("editor: align {alignment:?}");
    }
}

struct ConsoleHost;

impl ToolbarDelegate for ConsoleHost {
    fn insert_link(&self, _toolbar: &EditorToolbar) {
        println!("host: present link prompt");
    }
    fn change_text_color(&self, _toolbar: &EditorToolbar) {
        println!("host: present color picker");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let editor: Arc<Mutex<dyn RichEditor>> = Arc::new(Mutex::new(ConsoleEditor));
    let host: Arc<dyn ToolbarDelegate> = Arc::new(ConsoleHost);

    let mut toolbar = EditorToolbar::new().with_visible_width(320.0);
    toolbar.set_editor(Arc::downgrade(&editor));
    toolbar.set_delegate(Arc::downgrade(&host));
    toolbar.option_triggered.connect(|&option| {
        println!("toolbar: triggered {option:?}");
    });

    toolbar.set_options(vec![
        ToolbarOption::Bold,
        ToolbarOption::Italic,
        ToolbarOption::OrderedList,
        ToolbarOption::TextColor,
        ToolbarOption::InsertLink,
    ]);
    println!(
        "layout: content {} container {:?} scrollable {}",
        toolbar.content_width(),
        toolbar.container_size(),
        toolbar.scroll().is_scrollable()
    );

    // The everything-on configuration overflows a 320-unit frame.
    toolbar.set_options(ToolbarOption::default_set());
    println!(
        "layout: content {} container {:?} scrollable {}",
        toolbar.content_width(),
        toolbar.container_size(),
        toolbar.scroll().is_scrollable()
    );
    toolbar.scroll_mut().scroll_by(120.0);

    // Mirror caret state, then tap a few buttons.
    toolbar.update_selected_items(&[ToolbarOption::Bold, ToolbarOption::OrderedList]);
    for (index, option) in toolbar.options().iter().enumerate() {
        if matches!(
            option,
            ToolbarOption::Bold | ToolbarOption::TextColor | ToolbarOption::InsertLink
        ) {
            toolbar.tap(index);
        }
    }

    // Dropping the editor turns editor commands into silent no-ops.
    drop(editor);
    toolbar.tap(3);
}
