use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    GeneratePrompt,
    CopyPrompt,
    ClearAttachments,
    Quit,
}

/// Build the top menu bar and report the action the user picked.
///
/// Theme switching is applied immediately to the context; the caller only
/// needs to persist the updated `theme` value.
pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    attachment_count: usize,
    help_open: &mut bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;

    ui.menu_button("Prompt", |ui| {
        if ui.button("Generate").clicked() {
            menu_action = MenuAction::GeneratePrompt;
            ui.close();
        }
        if ui.button("Copy to Clipboard").clicked() {
            menu_action = MenuAction::CopyPrompt;
            ui.close();
        }
        if ui.button("Clear Attachments").clicked() {
            menu_action = MenuAction::ClearAttachments;
            ui.close();
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("❓").clicked() {
            *help_open = !*help_open;
        }
        if attachment_count > 0 {
            ui.label(format!("📎 {}", attachment_count));
        }
    });

    menu_action
}
