use eframe::egui;
use egui::{Color32, Context, Key, RichText, Window};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;

/// Status of the file picker
#[derive(PartialEq)]
pub enum FilePickerStatus {
    /// The picker is open and waiting for input
    Open,
    /// The picker was closed without selecting anything
    Closed,
    /// One batch of files was selected for attachment
    Selected(Vec<PathBuf>),
}

/// A directory browser with fuzzy search and multi-select, used for
/// click-to-browse attachment. Marked files are returned as one intake
/// batch when the user confirms.
pub struct FilePicker {
    /// Current status of the picker
    pub status: FilePickerStatus,

    /// Current directory being browsed
    current_dir: PathBuf,

    /// Current search query
    query: String,

    /// Currently filtered entries in the current directory
    filtered_entries: Vec<(String, bool)>, // (name, is_dir)

    /// Currently selected entry index
    selected_index: Option<usize>,

    /// Files marked for attachment, in the order they were marked
    marked: Vec<PathBuf>,

    /// Error message, if any
    error_message: Option<String>,

    matcher: SkimMatcherV2,
}

impl Default for FilePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePicker {
    /// Create a new picker starting in the user's home directory.
    pub fn new() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let mut picker = Self {
            status: FilePickerStatus::Open,
            current_dir: home_dir,
            query: String::new(),
            filtered_entries: Vec::new(),
            selected_index: None,
            marked: Vec::new(),
            error_message: None,
            matcher: SkimMatcherV2::default(),
        };

        // Initial directory listing
        picker.update_entries();

        picker
    }

    /// Update the filtered entries based on the current query
    fn update_entries(&mut self) {
        self.filtered_entries.clear();
        self.selected_index = None;

        match std::fs::read_dir(&self.current_dir) {
            Ok(entries) => {
                // Collect all entries and sort them (directories first)
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in entries.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();
                    let is_dir = path.is_dir();

                    // Skip hidden files and directories
                    if name.starts_with('.') {
                        continue;
                    }

                    if self.query.is_empty() || self.matches_query(&name) {
                        if is_dir {
                            dirs.push((name, true));
                        } else {
                            files.push((name, false));
                        }
                    }
                }

                dirs.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
                files.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));

                self.filtered_entries.extend(dirs);
                self.filtered_entries.extend(files);

                if !self.filtered_entries.is_empty() {
                    self.selected_index = Some(0);
                }
            }
            Err(e) => {
                self.error_message = Some(format!("Error reading directory: {}", e));
            }
        }
    }

    fn matches_query(&self, name: &str) -> bool {
        self.matcher.fuzzy_match(name, &self.query).is_some()
    }

    /// Navigate into a directory or toggle a file's attachment mark.
    fn activate_entry(&mut self, index: usize) {
        if index >= self.filtered_entries.len() {
            return;
        }
        let (name, is_dir) = self.filtered_entries[index].clone();

        if is_dir {
            let new_dir = self.current_dir.join(&name);
            if new_dir.is_dir() {
                self.current_dir = new_dir;
                self.query = String::new();
                self.error_message = None;
                self.update_entries();
            } else {
                self.error_message = Some(format!("Cannot access directory: {}", name));
            }
        } else {
            let path = self.current_dir.join(&name);
            if let Some(pos) = self.marked.iter().position(|p| p == &path) {
                self.marked.remove(pos);
            } else {
                self.marked.push(path);
            }
        }
    }

    /// Navigate to the parent directory
    fn navigate_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            self.query = String::new();
            self.update_entries();
        }
    }

    /// Confirm the marked files as one attachment batch.
    fn confirm(&mut self) {
        self.status = FilePickerStatus::Selected(std::mem::take(&mut self.marked));
    }

    /// Show the picker window
    pub fn show(&mut self, ctx: &Context) {
        if self.status != FilePickerStatus::Open {
            return;
        }

        ctx.memory_mut(|mem| mem.request_focus(egui::Id::new("file_picker_search")));

        let screen_rect = ctx.screen_rect();
        let window_width = screen_rect.width() * 0.6;
        let window_height = screen_rect.height() * 0.6;
        let window_pos = egui::Pos2::new(
            screen_rect.center().x - (window_width / 2.0),
            screen_rect.center().y - (window_height / 2.0),
        );

        Window::new("Attach Files")
            .fixed_pos(window_pos)
            .fixed_size([window_width, window_height])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Directory:");
                        ui.monospace(self.current_dir.display().to_string());
                    });

                    let search_response = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .id(egui::Id::new("file_picker_search"))
                            .hint_text("Type to filter, Enter to open/mark, ← for parent")
                            .desired_width(f32::INFINITY),
                    );
                    if search_response.changed() {
                        let keep = self.selected_index;
                        self.update_entries();
                        // update_entries resets the cursor; keep it stable on refilter
                        if let Some(idx) = keep {
                            if idx < self.filtered_entries.len() {
                                self.selected_index = Some(idx);
                            }
                        }
                    }

                    if let Some(error) = &self.error_message {
                        ui.colored_label(Color32::RED, error);
                    }

                    ui.separator();

                    let mut activate: Option<usize> = None;
                    egui::ScrollArea::vertical()
                        .max_height(window_height - 140.0)
                        .show(ui, |ui| {
                            for (i, (name, is_dir)) in self.filtered_entries.iter().enumerate() {
                                let marked = !is_dir
                                    && self.marked.iter().any(|p| p == &self.current_dir.join(name));
                                let icon = if *is_dir {
                                    "📁"
                                } else if marked {
                                    "✔"
                                } else {
                                    "📄"
                                };
                                let label = format!("{} {}", icon, name);
                                let text = if marked {
                                    RichText::new(label).strong()
                                } else {
                                    RichText::new(label)
                                };
                                let selected = self.selected_index == Some(i);
                                if ui.selectable_label(selected, text).clicked() {
                                    activate = Some(i);
                                }
                            }
                        });
                    if let Some(i) = activate {
                        self.selected_index = Some(i);
                        self.activate_entry(i);
                    }

                    ui.separator();

                    ui.horizontal(|ui| {
                        let attach_label = format!("Attach {} file(s)", self.marked.len());
                        if ui
                            .add_enabled(!self.marked.is_empty(), egui::Button::new(attach_label))
                            .clicked()
                        {
                            self.confirm();
                        }
                        if ui.button("Cancel").clicked() {
                            self.status = FilePickerStatus::Closed;
                        }
                    });
                });
            });

        self.handle_keys(ctx);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.status = FilePickerStatus::Closed;
            return;
        }

        if ctx.input(|i| i.key_pressed(Key::Enter)) {
            if let Some(idx) = self.selected_index {
                self.activate_entry(idx);
            }
        }

        if ctx.input(|i| i.key_pressed(Key::ArrowLeft)) && self.query.is_empty() {
            self.navigate_to_parent();
        }

        if ctx.input(|i| i.key_pressed(Key::ArrowDown)) {
            if let Some(idx) = self.selected_index {
                if idx + 1 < self.filtered_entries.len() {
                    self.selected_index = Some(idx + 1);
                }
            } else if !self.filtered_entries.is_empty() {
                self.selected_index = Some(0);
            }
        }

        if ctx.input(|i| i.key_pressed(Key::ArrowUp)) {
            if let Some(idx) = self.selected_index {
                if idx > 0 {
                    self.selected_index = Some(idx - 1);
                }
            }
        }
    }
}
