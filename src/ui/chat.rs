/// Message list rendering
use crate::core::formatter::BULLET;
use crate::core::{parse_message, ConversationMessage, Line, Sender, Span, Style};
use crate::i18n::UiText;
use eframe::egui;

/// Styling constants for the message list
pub const BUBBLE_RADIUS: u8 = 8;
pub const BUBBLE_MARGIN: i8 = 8;
pub const MESSAGE_SPACING: f32 = 6.0;
pub const PARAGRAPH_SPACING: f32 = 4.0;

fn show_span(ui: &mut egui::Ui, span: &Span) {
    match span.style {
        Style::Plain => {
            ui.label(span.text.as_str());
        }
        Style::Strong => {
            ui.label(egui::RichText::new(span.text.as_str()).strong());
        }
        Style::Emphasis => {
            ui.label(egui::RichText::new(span.text.as_str()).italics());
        }
        Style::Code => {
            ui.label(egui::RichText::new(span.text.as_str()).code());
        }
        Style::Link => {
            ui.hyperlink(&span.text);
        }
    }
}

/// Draws assistant markup with the same parse the HTML formatter uses
fn show_markup(ui: &mut egui::Ui, content: &str) {
    for (i, paragraph) in parse_message(content).iter().enumerate() {
        if i > 0 {
            ui.add_space(PARAGRAPH_SPACING);
        }

        for line in paragraph {
            if let Line::Text(spans) = line {
                if spans.is_empty() {
                    continue;
                }
            }

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                if matches!(line, Line::Bullet(_)) {
                    ui.label(BULLET);
                }
                for span in line.spans() {
                    show_span(ui, span);
                }
            });
        }
    }
}

fn show_message(ui: &mut egui::Ui, message: &ConversationMessage, text: &UiText) {
    let (fill, name) = match message.sender {
        Sender::User => (egui::Color32::from_rgb(46, 104, 170), text.you),
        Sender::Bot => (ui.visuals().faint_bg_color, text.assistant),
    };

    egui::Frame::NONE
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(BUBBLE_RADIUS))
        .inner_margin(egui::Margin::same(BUBBLE_MARGIN))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(name).small().weak());
                ui.label(egui::RichText::new(message.time_label()).small().weak());
            });
            match message.sender {
                Sender::User => {
                    ui.label(egui::RichText::new(message.content.as_str()).color(egui::Color32::WHITE));
                }
                Sender::Bot => show_markup(ui, &message.content),
            }
        });
}

/// Scrolling list of the conversation, newest at the bottom
pub fn show_messages(
    ui: &mut egui::Ui,
    messages: &[ConversationMessage],
    text: &UiText,
    is_thinking: bool,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                show_message(ui, message, text);
                ui.add_space(MESSAGE_SPACING);
            }

            if is_thinking {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new(text.thinking).weak());
                });
            }
        });
}
