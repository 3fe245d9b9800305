use std::rc::Rc;

use gtk4::prelude::*;
use relm4_macros::view;

use crate::config::Config;
use crate::helpers::gesture;
use crate::logind;
use crate::session::{self, Action, SessionSnapshot};

pub fn action_button(
    action: Action,
    config: &Config,
    logind: Rc<logind::Manager>,
    snapshot: Rc<SessionSnapshot>,
) -> gtk4::Button {
    view! {
        content = gtk4::Box {
            set_orientation: gtk4::Orientation::Horizontal,
            set_spacing: 8,

            gtk4::Image {
                set_icon_name: Some(action.icon_name()),
                set_pixel_size: config.icon_size,
            },

            gtk4::Label {
                set_label: action.label(),
                set_css_classes: &["action-button-label"],
            }
        },

        button = gtk4::Button {
            set_css_classes: &["action-button"],
            set_sensitive: snapshot.availability.allows(action),
            set_child: Some(&content)
        }
    };

    button.connect_clicked(move |button| {
        action.dispatch(&logind, &snapshot);

        // Single-shot: the window goes away no matter how the call went.
        if let Some(window) = button.root().and_downcast::<gtk4::Window>() {
            window.close();
        }
    });

    button
}

pub fn new(
    application: &libadwaita::Application,
    config: &Config,
    logind: Rc<logind::Manager>,
    snapshot: Rc<SessionSnapshot>,
) -> gtk4::ApplicationWindow {
    let schedule_message = session::schedule_message(&snapshot.schedule);

    view! {
        menu_box = gtk4::Box {
            set_orientation: gtk4::Orientation::Vertical,
            set_spacing: 8,
            set_margin_top: 16,
            set_margin_bottom: 16,
            set_margin_start: 16,
            set_margin_end: 16,
            set_css_classes: &["power-menu"],

            gtk4::Label {
                set_label: &schedule_message,
                set_css_classes: &["schedule-label"],
                set_wrap: true
            }
        },

        exit_button = gtk4::Button {
            set_label: "Exit",
            set_css_classes: &["exit-button"]
        },

        window = gtk4::ApplicationWindow {
            set_application: Some(application),
            set_title: Some(config.window_title.as_str()),
            set_resizable: false,
            set_default_width: 350,

            set_child: Some(&menu_box)
        }
    };

    for action in Action::ALL {
        if !config.show_disabled && !snapshot.availability.allows(action) {
            continue;
        }

        menu_box.append(&action_button(
            action,
            config,
            logind.clone(),
            snapshot.clone(),
        ));
    }

    // Exit performs no remote call.
    exit_button.connect_clicked({
        let window = window.clone();
        move |_| window.close()
    });
    menu_box.append(&exit_button);

    window.add_controller(gesture::on_key_press({
        let window = window.clone();

        move |val, _| {
            if val.name() == Some("Escape".into()) {
                window.close();
            }
        }
    }));

    window.set_default_widget(Some(&exit_button));

    window
}
