/// Header toggles and quick-question buttons
use crate::i18n::{Language, QuickQuestion, Theme};
use eframe::egui;

/// Shows the switch to the other language; returns it when clicked
pub fn language_toggle(ui: &mut egui::Ui, current: Language) -> Option<Language> {
    let next = current.toggle();
    ui.button(next.label())
        .on_hover_text(next.code())
        .clicked()
        .then_some(next)
}

/// Returns the new theme when clicked
pub fn theme_toggle(ui: &mut egui::Ui, current: Theme) -> Option<Theme> {
    ui.button(current.toggle().icon()).clicked().then(|| current.toggle())
}

/// Returns true when the conversation should be cleared
pub fn clear_button(ui: &mut egui::Ui, hover: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, egui::Button::new("🗑"))
        .on_hover_text(hover)
        .clicked()
}

/// Row of canned prompts; returns the message of the one clicked
pub fn quick_questions(
    ui: &mut egui::Ui,
    questions: &'static [QuickQuestion],
    enabled: bool,
) -> Option<&'static str> {
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for question in questions {
            if ui
                .add_enabled(enabled, egui::Button::new(question.label).small())
                .clicked()
            {
                picked = Some(question.message);
            }
        }
    });
    picked
}
