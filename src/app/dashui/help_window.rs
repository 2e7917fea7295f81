use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(500.0);
        let window_height = central_panel_size.y.min(420.0);

        let mut open = self.open;
        egui::Window::new("Help")
            .open(&mut open)
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                self.ui_content(ui);
            });
        self.open = open;
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Workflow");
            ui.add_space(5.0);

            ui.label("1. Pick a task type; the instructions are seeded with its template");
            ui.label("2. Edit the instructions to describe your task");
            ui.label("3. Attach files by dropping them on the window or via Select Files");
            ui.label("4. Generate the prompt and copy it to the clipboard");

            ui.add_space(15.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("F1").strong());
                ui.label("- Toggle this help window");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Escape").strong());
                ui.label("- Close the file picker");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Enter").strong());
                ui.label("- Open directory / mark file in the file picker");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("←").strong());
                ui.label("- Go to the parent directory in the file picker");
            });

            ui.add_space(15.0);

            ui.heading("Notes");
            ui.add_space(5.0);

            ui.label("Files are attached in the order they are dropped; a file that");
            ui.label("cannot be read is skipped without aborting the rest of its batch.");
            ui.label("Removing an attachment removes every attachment with that name.");

            ui.add_space(15.0);

            ui.heading("About");
            ui.add_space(5.0);
            ui.label(format!(
                "PromptDash {} ({} @ {})",
                env!("CARGO_PKG_VERSION"),
                env!("GIT_BRANCH"),
                env!("GIT_COMMIT")
            ));

            ui.add_space(20.0);
        });
    }
}
