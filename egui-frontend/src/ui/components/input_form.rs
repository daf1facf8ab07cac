//! # Input Form Module
//!
//! The four labelled amount inputs and the "Update Dashboard" button.
//! Fields that failed to parse on the last refresh are drawn in the error color.

use eframe::egui;
use shared::InputField;
use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

pub const UPDATE_BUTTON_TEXT: &str = "Update Dashboard";
const INPUT_WIDTH: f32 = 150.0;
const FORM_WIDTH: f32 = 620.0;

impl FinanceDashboardApp {
    /// Render the input grid and update button.
    ///
    /// Returns true when a refresh was requested (button click or Enter in a field).
    pub fn render_input_form(&mut self, ui: &mut egui::Ui) -> bool {
        let mut submitted = false;

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - FORM_WIDTH) / 2.0).max(0.0));

            egui::Grid::new("dashboard_input_grid")
                .num_columns(4)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (index, field) in InputField::ALL.iter().enumerate() {
                        submitted |= self.render_input_field(ui, *field);
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });

        ui.add_space(6.0);

        let button = egui::Button::new(
            egui::RichText::new(UPDATE_BUTTON_TEXT)
                .color(CURRENT_THEME.interactive.button_text)
                .strong(),
        )
        .fill(CURRENT_THEME.interactive.button_fill);

        if ui.add(button).clicked() {
            submitted = true;
        }

        submitted
    }

    fn render_input_field(&mut self, ui: &mut egui::Ui, field: InputField) -> bool {
        let invalid = self.form.is_invalid(field);
        let label_color = if invalid { colors::TEXT_ERROR } else { colors::TEXT_PRIMARY };
        ui.label(egui::RichText::new(format!("{}:", field.label())).color(label_color));

        let mut text_edit = egui::TextEdit::singleline(self.form.inputs.field_mut(field))
            .desired_width(INPUT_WIDTH);
        if invalid {
            text_edit = text_edit.text_color(colors::TEXT_ERROR);
        }

        let response = ui.add(text_edit);
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}
