use egui::{Margin, RichText, Stroke, TextEdit};

use super::style;

/// Window title, set once at startup.
pub const WINDOW_TITLE: &str = "Sentiment Analysis";

const HEADING: &str = "Sentiment Detector";
const MODEL_CREDIT: &str = "Model by Harsha Vardhan Khurdula.";
const INPUT_HINT: &str = "Enter text in English:";
const OUTPUT_HEADER: &str = "Sentiment:";
const MODEL_NOTE: &str = "Note: The model can only classify your input into \
                          Positive or Negative class, hence even neutral \
                          comments will have to fall under these labels.";

pub enum UiEvent {
    InputEdited,
    ClearClicked,
}

/// Draws the central panel. Returns the widget event to feed back into the
/// state machine, if any.
pub fn render(ui: &mut egui::Ui, input: &mut String, output: &str) -> Option<UiEvent> {
    let palette = style::palette();
    let mut event = None;

    ui.spacing_mut().item_spacing = egui::vec2(10.0, 8.0);
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(HEADING).color(palette.text_primary));
        ui.label(
            RichText::new(MODEL_CREDIT)
                .italics()
                .color(palette.text_muted),
        );
    });
    ui.add_space(8.0);

    ui.label(RichText::new(INPUT_HINT).color(palette.text_muted));
    ui.horizontal(|ui| {
        let editor = TextEdit::multiline(input)
            .desired_rows(4)
            .desired_width(ui.available_width() - 64.0);
        if ui.add(editor).changed() {
            event = Some(UiEvent::InputEdited);
        }
        if ui.button("Clear").clicked() {
            event = Some(UiEvent::ClearClicked);
        }
    });

    ui.add_space(8.0);
    ui.label(RichText::new(OUTPUT_HEADER).color(palette.text_muted));
    ui.label(RichText::new(MODEL_NOTE).small().color(palette.text_muted));
    egui::Frame::new()
        .fill(palette.bg_secondary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(160.0);
            ui.label(
                RichText::new(output)
                    .monospace()
                    .color(palette.accent_mint),
            );
        });

    event
}
