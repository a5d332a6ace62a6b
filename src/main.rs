//! Roster Admin GUI - a desktop interface for managing employee records
//!
//! Built with GPUI and Monokai Pro theme

mod api;
mod app;
mod components;
mod export;
mod handlers;
mod images;
mod models;
mod theme;

use gpui::{
    px, size, AppContext as _, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;

use app::App;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1200.), px(800.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Roster Admin")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(window, cx));

            // Focus the username field so sign-in is one keystroke away
            app_entity.update(cx, |app, cx| {
                app.username_input.update(cx, |state, cx| {
                    state.focus(window, cx);
                });
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        })
        .unwrap();
    });
}
