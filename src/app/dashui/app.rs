use eframe::egui;
use tracing::info;

use super::file_picker::{FilePicker, FilePickerStatus};
use super::help_window::HelpWindow;
use super::menu::{self, MenuAction};
use crate::app::file_intake::{decode_text, FileIntake, FileSource};
use crate::app::session::{SessionEvent, SessionState};
use crate::app::task_type::TaskType;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// The PromptDash application.
///
/// Only the theme choice is persisted through eframe storage; the session
/// (task type, instructions, attachments, generated prompt) is transient by
/// design and starts empty on every launch.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)]
pub struct PromptDashApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    session: SessionState,
    #[serde(skip)]
    file_intake: FileIntake,
    #[serde(skip)]
    file_picker: Option<FilePicker>,
    #[serde(skip)]
    help_window: HelpWindow,
}

impl PromptDashApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.apply_theme(&cc.egui_ctx);

        app
    }

    /// Apply the current catppuccin theme to the egui context.
    pub fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }
    }

    /// Read-only view of the session, for integration tests and the UI.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Commit every intake batch that settled since the last frame.
    fn drain_intake(&mut self, ctx: &egui::Context) {
        for batch in self.file_intake.poll() {
            if batch.files.len() < batch.attempted {
                info!(
                    "Intake batch settled: {} of {} file(s) readable",
                    batch.files.len(),
                    batch.attempted
                );
            }
            self.session.apply(SessionEvent::AttachBatch(batch.files));
        }

        // Keep polling promptly while reads are outstanding.
        if self.file_intake.is_reading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    /// Turn one OS drag-and-drop action into one intake batch.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        // Inline entries ride along in the same batch so a drop mixing
        // path-backed and bytes-backed files still commits contiguously,
        // in drop order.
        let sources: Vec<FileSource> = dropped
            .into_iter()
            .filter_map(|file| {
                if let Some(path) = file.path {
                    Some(FileSource::Path(path))
                } else {
                    file.bytes
                        .map(|bytes| FileSource::Inline(decode_text(&file.name, &bytes)))
                }
            })
            .collect();

        info!("Files dropped: {} source(s)", sources.len());
        self.file_intake.start_batch(sources);
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let action = menu::build_menu(
                    ui,
                    ctx,
                    &mut self.theme,
                    self.session.files.len(),
                    &mut self.help_window.open,
                );

                match action {
                    MenuAction::GeneratePrompt => {
                        self.session.apply(SessionEvent::GeneratePrompt);
                    }
                    MenuAction::CopyPrompt => {
                        if self.session.has_prompt() {
                            ctx.copy_text(self.session.generated_prompt.clone());
                        }
                    }
                    MenuAction::ClearAttachments => {
                        self.session.apply(SessionEvent::ClearAttachments);
                    }
                    MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    MenuAction::None => {}
                }
            });
        });
    }

    fn render_task_type_selector(&mut self, ui: &mut egui::Ui) {
        let mut selection = self.session.task_type;
        egui::ComboBox::from_label("Task Type")
            .selected_text(
                selection.map_or_else(|| "Select Task Type".to_string(), |t| t.to_string()),
            )
            .show_ui(ui, |ui| {
                for task_type in TaskType::ALL {
                    ui.selectable_value(&mut selection, Some(task_type), task_type.to_string());
                }
            });
        if selection != self.session.task_type {
            if let Some(task_type) = selection {
                self.session.apply(SessionEvent::SelectTaskType(task_type));
            }
        }
    }

    fn render_instructions_editor(&mut self, ui: &mut egui::Ui) {
        let mut text = self.session.instructions.clone();
        let response = ui.add(
            egui::TextEdit::multiline(&mut text)
                .hint_text("Task Instructions")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.session.apply(SessionEvent::EditInstructions(text));
        }
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if hovering {
                    ui.label(egui::RichText::new("Release to attach").strong());
                } else {
                    ui.label("Drag & drop files here, or click to select files");
                }
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 60.0);
                    if ui.button("Select Files").clicked() && self.file_picker.is_none() {
                        self.file_picker = Some(FilePicker::new());
                    }
                    if self.file_intake.is_reading() {
                        ui.spinner();
                        ui.label("Reading files…");
                    }
                });
            });
        });
    }

    fn render_attachment_list(&mut self, ui: &mut egui::Ui) {
        if self.session.files.is_empty() {
            return;
        }

        let mut remove: Option<String> = None;
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Selected Files").heading());
            for file in &self.session.files {
                ui.horizontal(|ui| {
                    ui.label(&file.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🗑").clicked() {
                            remove = Some(file.name.clone());
                        }
                    });
                });
            }
        });
        if let Some(name) = remove {
            self.session.apply(SessionEvent::RemoveFile(name));
        }
    }

    fn render_prompt_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if !self.session.has_prompt() {
            return;
        }

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Generated Prompt").heading());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Copy").clicked() {
                        ctx.copy_text(self.session.generated_prompt.clone());
                        info!(
                            "Copied generated prompt to clipboard ({} chars)",
                            self.session.generated_prompt.len()
                        );
                    }
                });
            });
            egui::ScrollArea::vertical()
                .id_salt("prompt_view_scroll")
                .max_height(260.0)
                .show(ui, |ui| {
                    // Read-only view of the last generated prompt.
                    ui.add(
                        egui::TextEdit::multiline(&mut self.session.generated_prompt.as_str())
                            .desired_width(f32::INFINITY)
                            .font(egui::TextStyle::Monospace),
                    );
                });
        });
    }

    fn render_file_picker(&mut self, ctx: &egui::Context) {
        let Some(picker) = &mut self.file_picker else {
            return;
        };

        picker.show(ctx);
        match std::mem::replace(&mut picker.status, FilePickerStatus::Open) {
            FilePickerStatus::Open => {}
            FilePickerStatus::Closed => {
                self.file_picker = None;
            }
            FilePickerStatus::Selected(paths) => {
                info!("File picker selected {} file(s)", paths.len());
                self.file_intake
                    .start_batch(paths.into_iter().map(FileSource::Path).collect());
                self.file_picker = None;
            }
        }
    }

    fn handle_global_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) && !ctx.wants_keyboard_input() {
            self.help_window.open = !self.help_window.open;
        }
    }
}

impl eframe::App for PromptDashApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_intake(ctx);
        self.handle_dropped_files(ctx);
        self.handle_global_keys(ctx);

        self.render_menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("AI Prompt");
                ui.add_space(8.0);

                self.render_task_type_selector(ui);
                ui.add_space(8.0);
                self.render_instructions_editor(ui);
                ui.add_space(8.0);
                self.render_drop_zone(ui, ctx);
                ui.add_space(8.0);
                self.render_attachment_list(ui);
                ui.add_space(8.0);

                if ui
                    .add_sized(
                        [ui.available_width(), 28.0],
                        egui::Button::new("Generate Prompt"),
                    )
                    .clicked()
                {
                    self.session.apply(SessionEvent::GeneratePrompt);
                }
                ui.add_space(8.0);

                self.render_prompt_view(ui, ctx);
            });
        });

        self.render_file_picker(ctx);
        self.help_window.show(ctx);
    }
}
