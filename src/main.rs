#[macro_use]
extern crate tracing;

mod config;
mod filesystem;
mod helpers;
mod logind;
mod session;
mod widgets;

use std::rc::Rc;

use gtk4::prelude::*;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

const APP_ID: &str = "io.github.powerbox";

fn apply_styles() {
    let provider = gtk4::CssProvider::new();
    provider.load_from_data(include_str!("style.css"));

    gtk4::style_context_add_provider_for_display(
        &gdk4::Display::default().expect("Failed to get default display"),
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "powerbox=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::read();

    let logind = match logind::Manager::connect() {
        Ok(manager) => Rc::new(manager),
        Err(err) => {
            error!(%err, "Failed to connect to the system D-Bus");
            std::process::exit(1);
        }
    };

    // Capability and schedule queries degrade to safe defaults inside
    // gather; only a failed session id query lands here.
    let snapshot = match logind.gather() {
        Ok(snapshot) => Rc::new(snapshot),
        Err(err) => {
            error!(%err, "Failed to query the current session id");
            std::process::exit(1);
        }
    };

    let application = libadwaita::Application::new(Some(APP_ID), Default::default());

    application.connect_startup(|_| apply_styles());
    application.connect_activate(move |app| {
        let window = widgets::power_menu::new(app, &config, logind.clone(), snapshot.clone());
        window.present();
    });

    // Run the application
    application.run_with_args::<String>(&[]);
}
