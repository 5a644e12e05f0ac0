use egui::{Align, Align2, Button, Color32, Frame, Layout, RichText, ScrollArea, Ui};

use crate::config::Config;
use crate::editor::{self, EditForm};
use crate::enums::{Dialog, EditOutcome};
use crate::launcher;
use crate::library::Library;
use crate::listing::{self, ListEntry};

const BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);
const TEXT: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
const BUTTON: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const LIST: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
const SELECTION: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const WATERMARK: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

const ICON_SIZE: f32 = 48.0;

const IMAGE_FILTER: (&str, &[&str]) = ("Images", &["png", "jpg", "ico"]);

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PandaLauncher {
    config: Config,
    selected: Option<usize>,

    #[serde(skip)]
    library: Library,

    #[serde(skip)]
    entries: Vec<ListEntry>,

    #[serde(skip)]
    dialog: Dialog,

    /// Set when the library file could not be read. Nothing is saved while set.
    #[serde(skip)]
    fault: Option<String>,
}

impl Default for PandaLauncher {
    fn default() -> Self {
        Self {
            config: Config::default(),
            selected: None,

            library: Library::default(),
            entries: Vec::new(),

            dialog: Dialog::None,
            fault: None,
        }
    }
}

impl PandaLauncher {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.reload();

        app
    }

    pub fn with_config(config: Config) -> Self {
        let mut app = Self {
            config,
            ..Default::default()
        };

        app.reload();

        app
    }

    /// Reads the library file again and rebuilds the list.
    pub fn reload(&mut self) {
        match Library::load(&self.config.library_file) {
            Ok(library) => {
                self.library = library;
                self.fault = None;
            }
            Err(e) => {
                log::error!("Could not load game library: {e}");

                self.library = Library::empty(&self.config.library_file);
                self.fault = Some(e.to_string());
            }
        }

        self.refresh();
    }

    fn refresh(&mut self) {
        self.entries = listing::sync(self.library.games(), &self.config.default_icon);

        if self.selected.is_some_and(|index| index >= self.entries.len()) {
            self.selected = None;
        }
    }

    pub fn add_game(&mut self, executable: &str, icon: Option<&str>) {
        if self.fault.is_some() {
            return;
        }

        let game = match editor::create(executable, icon, &self.config.default_icon_str()) {
            Ok(game) => game,
            Err(e) => {
                self.dialog = Dialog::error("Add Game", e.to_string());
                return;
            }
        };

        if let Err(e) = self.library.append(game) {
            log::warn!("Failed to add game: {e}");
            self.dialog = Dialog::error("Save Failed", format!("Error saving game library:\n{e}"));
        }

        self.refresh();
    }

    pub fn edit_selected(&mut self) {
        match self
            .selected
            .and_then(|index| self.library.get(index).map(|game| (index, game)))
        {
            Some((index, game)) => {
                self.dialog = Dialog::Edit {
                    index,
                    form: EditForm::from_game(game),
                }
            }
            None => self.dialog = Dialog::info("No selection", "Pick a game first!"),
        }
    }

    pub fn save_edit(&mut self, index: usize, form: EditForm) {
        if self.fault.is_some() {
            return;
        }

        if let Err(e) = self.library.replace(index, form.finish()) {
            log::warn!("Failed to save game {index}: {e}");
            self.dialog = Dialog::error("Save Failed", format!("Error saving game library:\n{e}"));
        }

        self.refresh();
    }

    /// Returns true when the selected game was started and the launcher should close.
    pub fn launch_selected(&mut self) -> bool {
        let Some(game) = self.selected.and_then(|index| self.library.get(index)) else {
            self.dialog = Dialog::info("No selection", "Pick a game to launch!");
            return false;
        };

        match launcher::launch(game) {
            Ok(_child) => true,
            Err(e) => {
                log::warn!("{e}");
                self.dialog = Dialog::error("Launch Failed", format!("Error launching game:\n{e}"));
                false
            }
        }
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|index| *index < self.entries.len());
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    fn pick_new_game(&mut self) {
        let mut executable_dialog = rfd::FileDialog::new().set_title("Select Game Executable");

        if cfg!(windows) {
            executable_dialog = executable_dialog.add_filter("Executables", &["exe"]);
        }

        let Some(executable) = executable_dialog.pick_file() else {
            return;
        };

        let icon = rfd::FileDialog::new()
            .set_title("Pick Game Icon (optional)")
            .add_filter(IMAGE_FILTER.0, IMAGE_FILTER.1)
            .pick_file();

        let executable = executable.to_string_lossy();
        let icon = icon.as_ref().map(|icon| icon.to_string_lossy());

        self.add_game(&executable, icon.as_deref());
    }

    fn show_background(&self, ui: &Ui) {
        let rect = ui.max_rect();

        if self.config.background_image.is_file() {
            egui::Image::new(file_uri(&self.config.background_image)).paint_at(ui, rect);
        } else {
            ui.painter().rect_filled(rect, 0.0, BACKGROUND);
        }
    }

    fn show_list(&mut self, ui: &mut Ui) {
        Frame::default().fill(LIST).inner_margin(6.0).show(ui, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut clicked = None;

                    for (index, entry) in self.entries.iter().enumerate() {
                        ui.horizontal(|ui| {
                            match &entry.icon {
                                Some(icon) => {
                                    ui.add(
                                        egui::Image::new(file_uri(icon))
                                            .fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE)),
                                    );
                                }
                                None => ui.add_space(ICON_SIZE),
                            }

                            let selected = self.selected == Some(index);
                            let label = RichText::new(&entry.label).size(16.0).color(TEXT);

                            if ui.selectable_label(selected, label).clicked() {
                                clicked = Some(index);
                            }
                        });
                    }

                    if clicked.is_some() {
                        self.selected = clicked;
                    }
                });
        });
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let mut dialog = std::mem::take(&mut self.dialog);

        let keep = match &mut dialog {
            Dialog::None => false,
            Dialog::Info { title, message } => message_window(ctx, title, message, TEXT),
            Dialog::Error { title, message } => {
                message_window(ctx, title, message, Color32::LIGHT_RED)
            }
            Dialog::Edit { index, form } => match edit_window(ctx, form) {
                EditOutcome::Open => true,
                EditOutcome::Cancel => false,
                EditOutcome::Save => {
                    self.save_edit(*index, form.clone());
                    false
                }
            },
        };

        if keep {
            self.dialog = dialog;
        }
    }

    fn show_fault(&self, ctx: &egui::Context, fault: &str) {
        egui::CentralPanel::default()
            .frame(Frame::default().fill(BACKGROUND).inner_margin(20.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Could not load the game library").color(TEXT));
                    ui.label(RichText::new(fault).color(Color32::LIGHT_RED));
                    ui.label(
                        RichText::new(format!(
                            "Fix or remove {} and start the launcher again.",
                            self.library.path().display()
                        ))
                        .color(TEXT),
                    );

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }
}

impl eframe::App for PandaLauncher {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(fault) = self.fault.clone() {
            self.show_fault(ctx, &fault);
            return;
        }

        let mut launched = false;

        egui::CentralPanel::default()
            .frame(Frame::default().inner_margin(10.0))
            .show(ctx, |ui| {
                self.show_background(ui);

                ui.visuals_mut().selection.bg_fill = SELECTION;

                ui.add_enabled_ui(!self.dialog.is_open(), |ui| {
                    ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                        if action_button(ui, "⚙️ Edit Selected Game").clicked() {
                            self.edit_selected();
                        }

                        if action_button(ui, "🚀 Launch Game").clicked() {
                            launched = self.launch_selected();
                        }

                        if action_button(ui, "➕ Add Game").clicked() {
                            self.pick_new_game();
                        }

                        ui.horizontal(|ui| {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(
                                    RichText::new("© 2025 Benthepanda. All rights reserved.")
                                        .size(10.0)
                                        .color(WATERMARK),
                                );
                            });
                        });

                        ui.with_layout(Layout::top_down_justified(Align::Min), |ui| {
                            self.show_list(ui);
                        });
                    });
                });
            });

        self.show_dialog(ctx);

        if launched {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

fn action_button(ui: &mut Ui, text: &str) -> egui::Response {
    ui.add(
        Button::new(RichText::new(text).color(TEXT))
            .fill(BUTTON)
            .rounding(10.0)
            .min_size(egui::vec2(ui.available_width(), 40.0)),
    )
}

/// Returns false once the user dismissed the window.
fn message_window(ctx: &egui::Context, title: &str, message: &str, color: Color32) -> bool {
    let mut open = true;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(message).color(color));

            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                open = false;
            }
        });

    open
}

fn edit_window(ctx: &egui::Context, form: &mut EditForm) -> EditOutcome {
    let mut outcome = EditOutcome::Open;
    let mut open = true;

    egui::Window::new("Edit Game")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Game Name:");
            ui.text_edit_singleline(&mut form.name);

            ui.label("Executable Path:");
            ui.text_edit_singleline(&mut form.path);

            ui.label("Icon Path:");
            ui.text_edit_singleline(&mut form.icon);

            if ui.button("Browse for Icon").clicked() {
                if let Some(icon) = rfd::FileDialog::new()
                    .set_title("Choose Icon")
                    .add_filter(IMAGE_FILTER.0, IMAGE_FILTER.1)
                    .pick_file()
                {
                    form.icon = icon.to_string_lossy().into_owned();
                }
            }

            ui.add_space(10.0);

            if ui.button("Save").clicked() {
                outcome = EditOutcome::Save;
            }
        });

    if !open {
        outcome = EditOutcome::Cancel;
    }

    outcome
}

fn file_uri(path: &std::path::Path) -> String {
    format!("file://{}", path.display())
}
