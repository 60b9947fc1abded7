use gcode_workflow_core::{PanelInputs, WorkflowActions};
use gcode_workflow_settings::PanelConfig;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Image, Label, Orientation, ResponseType};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::gtk::file_dialog;
use crate::ui::workflow_control::{ButtonGroup, ClickOutcome, WorkflowButton, WorkflowControl};

fn make_toolbar_button(button: WorkflowButton, icon_size: i32, show_label: bool) -> Button {
    let btn = Button::new();
    btn.set_tooltip_text(Some(button.label()));

    let content = Box::new(Orientation::Horizontal, 6);
    content.set_halign(Align::Center);
    content.set_valign(Align::Center);

    if button.group() == ButtonGroup::File {
        content.append(&Label::new(Some(button.label())));
        btn.add_css_class("suggested-action");
    } else {
        let img = Image::from_icon_name(button.icon_name());
        img.set_pixel_size(icon_size);
        content.append(&img);
        if show_label {
            let lbl = Label::new(Some(button.label()));
            lbl.set_valign(Align::Center);
            content.append(&lbl);
        }
    }

    btn.set_child(Some(&content));
    btn
}

/// GTK toolbar for a [`WorkflowControl`]
pub struct WorkflowControlView<A: WorkflowActions + Clone + 'static> {
    pub widget: Box,
    buttons: Vec<(WorkflowButton, Button)>,
    control: Rc<RefCell<WorkflowControl<A>>>,
    dialog_title: String,
    patterns: Vec<String>,
}

impl<A: WorkflowActions + Clone + 'static> WorkflowControlView<A> {
    pub fn new(control: WorkflowControl<A>, config: &PanelConfig) -> Rc<Self> {
        let widget = Box::new(Orientation::Horizontal, 12);
        widget.add_css_class("workflow-toolbar");

        let file_group = Box::new(Orientation::Horizontal, 0);
        let transport_group = Box::new(Orientation::Horizontal, 0);
        transport_group.add_css_class("linked");

        let mut buttons = Vec::with_capacity(WorkflowButton::ALL.len());
        for button in WorkflowButton::ALL {
            let btn = make_toolbar_button(button, config.toolbar.icon_size, config.toolbar.show_labels);
            match button.group() {
                ButtonGroup::File => file_group.append(&btn),
                ButtonGroup::Transport => transport_group.append(&btn),
            }
            buttons.push((button, btn));
        }

        widget.append(&file_group);
        widget.append(&transport_group);

        let patterns = control.intake().glob_patterns();
        let view = Rc::new(Self {
            widget,
            buttons,
            control: Rc::new(RefCell::new(control)),
            dialog_title: config.file_picker.dialog_title.clone(),
            patterns,
        });

        for (button, btn) in &view.buttons {
            let button = *button;
            let view_weak = Rc::downgrade(&view);
            btn.connect_clicked(move |b| {
                let Some(view) = view_weak.upgrade() else {
                    return;
                };
                let outcome = view.control.borrow_mut().click(button);
                if outcome == ClickOutcome::OpenFilePicker {
                    view.open_file_picker(b);
                }
            });
        }

        view.apply();
        view
    }

    /// Push new host inputs and refresh button sensitivity
    pub fn update(&self, inputs: PanelInputs) {
        self.control.borrow_mut().update(inputs);
        self.apply();
    }

    fn apply(&self) {
        let state = self.control.borrow().toolbar();
        for (button, btn) in &self.buttons {
            btn.set_sensitive(state.is_enabled(*button));
        }
    }

    fn open_file_picker(self: &Rc<Self>, anchor: &Button) {
        let parent = file_dialog::parent_window(anchor);
        let dialog = file_dialog::gcode_open_dialog(&self.dialog_title, &self.patterns, parent.as_ref());

        let view_weak = Rc::downgrade(self);
        dialog.connect_response(move |dlg, response| {
            if response == ResponseType::Accept {
                let path = dlg.file().and_then(|f| f.path());
                if let (Some(view), Some(path)) = (view_weak.upgrade(), path) {
                    view.load_file(path);
                }
            }
            dlg.destroy();
        });
        dialog.show();
    }

    fn load_file(&self, path: PathBuf) {
        let (file, intake, actions) = {
            let mut control = self.control.borrow_mut();
            let Some(file) = control.accept_selection(&path) else {
                return;
            };
            (file, control.intake().clone(), control.actions().clone())
        };

        // The read completes on the GLib main loop; no borrow of the
        // controller is held across it.
        glib::MainContext::default().spawn_local(async move {
            intake.intake(&actions, file).await;
        });
    }
}
