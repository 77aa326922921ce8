use crate::QuizApp;
use crate::ui::helpers::{ANSWER_SIZE, answer_card};
use crate::ui::layout::table_panel;
use egui::{Context, Grid};

pub fn ui_answer(app: &mut QuizApp, ctx: &Context) {
    table_panel(ctx, 340.0, 2.0 * ANSWER_SIZE.x + 40.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Elige la respuesta");
            ui.add_space(12.0);
        });

        // Se juega por posición; el juego la traduce al texto de la opción
        let mut chosen = None;
        Grid::new("answer_grid")
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (slot, card) in app.board.answers.iter().enumerate() {
                    if answer_card(ui, card) {
                        chosen = Some(slot);
                    }
                    if slot % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        if let Some(slot) = chosen {
            app.game.on_answer_card_chosen(slot, &mut app.board);
        }

        ui.add_space(12.0);
        if !app.board.feedback.is_empty() {
            ui.vertical_centered(|ui| ui.label(&app.board.feedback));
        }
    });
}
