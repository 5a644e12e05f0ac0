#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Panda Game Launcher")
            .with_inner_size([900.0, 650.0])
            .with_decorations(false)
            .with_fullscreen(true),
        ..Default::default()
    };

    eframe::run_native(
        "Panda Game Launcher",
        native_options,
        Box::new(|cc| Ok(Box::new(panda_launcher::PandaLauncher::new(cc)))),
    )
}
