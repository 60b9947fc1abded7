//! G-code file picker for the upload button.
//!
//! Uses `FileChooserDialog` rather than `FileChooserNative`, which depends on
//! the XDG Desktop Portal and is unreliable on some KDE and Wayland setups.

use gtk4::prelude::*;
use gtk4::{FileChooserAction, FileChooserDialog, FileFilter, ResponseType, Widget};

/// Create a modal single-file `FileChooserDialog` for opening G-code.
///
/// `patterns` are glob patterns such as `*.gcode`; they become the only
/// filter offered by the dialog.
pub fn gcode_open_dialog(
    title: &str,
    patterns: &[String],
    parent: Option<&gtk4::Window>,
) -> FileChooserDialog {
    let dlg = FileChooserDialog::new(
        Some(title),
        parent,
        FileChooserAction::Open,
        &[
            ("Cancel", ResponseType::Cancel),
            ("Open", ResponseType::Accept),
        ],
    );
    dlg.set_default_size(900, 700);
    dlg.set_modal(true);
    dlg.set_select_multiple(false);

    let filter = FileFilter::new();
    filter.set_name(Some("G-code files"));
    for pattern in patterns {
        filter.add_pattern(pattern);
    }
    dlg.add_filter(&filter);
    dlg.set_filter(&filter);
    dlg
}

/// Try to obtain the parent `gtk4::Window` from any widget.
pub fn parent_window(widget: &impl IsA<Widget>) -> Option<gtk4::Window> {
    widget
        .root()
        .and_then(|r| r.downcast::<gtk4::Window>().ok())
}
