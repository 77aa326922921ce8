use crate::QuizApp;
use crate::ui::layout::table_panel;
use egui::{Button, Context, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    table_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🃏 Quiz de cartas");
            ui.add_space(12.0);
            ui.label(format!(
                "Voltea una carta, memoriza la pregunta y elige la respuesta. {} preguntas.",
                app.game.questions().len()
            ));
            ui.add_space(18.0);

            if app.game.is_finished() {
                ui.label(
                    RichText::new(format!("Última partida: {} puntos", app.board.score))
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
                ui.add_space(10.0);
            }

            let btn = ui.add_sized([220.0, 44.0], Button::new(RichText::new("▶ EMPEZAR").heading()));
            if btn.clicked() {
                app.game.on_start_pressed(&mut app.board);
            }
        });
    });
}
