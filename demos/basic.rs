//! Standalone demo: opens a window with the folder picker.

use floem::prelude::*;
use floem::reactive::{create_effect, SignalGet};
use floem::window::WindowConfig;
use floem_folder_picker::{folder_picker, Palette};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let selected = RwSignal::new(Palette::default().initial().clone());
    create_effect(move |_| {
        let swatch = selected.get();
        tracing::info!(id = swatch.id(), value = swatch.value(), "folder color");
    });

    floem::Application::new()
        .window(
            move |_| {
                folder_picker(selected).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((480.0, 420.0))
                    .title("floem-folder-picker"),
            ),
        )
        .run();
}
