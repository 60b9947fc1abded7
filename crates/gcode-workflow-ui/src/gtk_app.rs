use gcode_workflow_core::CommandDispatcher;
use gcode_workflow_settings::PanelConfig;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box, Label, Orientation};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use crate::ui::gtk::WorkflowControlView;
use crate::ui::local_host::LocalHost;
use crate::ui::workflow_control::WorkflowControl;

/// Run the panel in a window, driven by a [`LocalHost`]
///
/// Must be called from within a tokio runtime context so that file reads
/// started from the GLib main loop can use `tokio::fs`.
pub fn main(config: PanelConfig) {
    let app = Application::builder()
        .application_id("io.github.gcode_workflow.Panel")
        .build();

    app.connect_activate(move |app| {
        let dispatcher = CommandDispatcher::default();
        let mut commands = dispatcher.subscribe();

        let control = WorkflowControl::new(dispatcher, config.file_intake());
        let view = WorkflowControlView::new(control, &config);

        let host = Rc::new(RefCell::new(LocalHost::default()));
        view.update(host.borrow().inputs());

        let status = Label::new(Some("No program loaded"));
        let content = Box::new(Orientation::Vertical, 12);
        content.set_margin_top(12);
        content.set_margin_bottom(12);
        content.set_margin_start(12);
        content.set_margin_end(12);
        content.append(&view.widget);
        content.append(&status);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("G-code Workflow")
            .child(&content)
            .build();
        window.present();

        glib::MainContext::default().spawn_local(async move {
            loop {
                let command = match commands.recv().await {
                    Ok(command) => command,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Dropped {} panel commands", skipped);
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                let inputs = host.borrow_mut().apply(&command);
                view.update(inputs);

                let text = match host.borrow().program() {
                    Some(p) => format!("{} ({} lines)", p.name, p.line_count),
                    None => "No program loaded".to_string(),
                };
                status.set_text(&text);
            }
        });
    });

    // Arguments were already consumed by the caller.
    app.run_with_args::<&str>(&[]);
}
