use crate::QuizApp;
use crate::ui::helpers::{CARD_SIZE, deck_card};
use crate::ui::layout::table_panel;
use egui::Context;

pub fn ui_card_selection(app: &mut QuizApp, ctx: &Context) {
    let card_count = app.board.deck.len();
    let row_width = card_count as f32 * (CARD_SIZE.x + 12.0);

    table_panel(ctx, 320.0, row_width.max(420.0), |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!(
                "Pregunta {} de {}",
                app.game.state().current_question_index + 1,
                app.game.questions().len()
            ));
            ui.add_space(8.0);
            ui.label("Elige una carta");
            ui.add_space(16.0);
        });

        let enabled = !app.board.deck_locked();
        let mut chosen = None;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for (i, card) in app.board.deck.iter().enumerate() {
                if deck_card(ui, *card, enabled) {
                    chosen = Some(i);
                }
            }
        });

        if let Some(i) = chosen {
            app.game.on_card_chosen(i, &mut app.board);
        }
    });
}
