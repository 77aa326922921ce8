use crate::QuizApp;
use crate::ui::layout::table_panel;
use egui::{Button, Context, RichText, ScrollArea};

pub fn ui_question(app: &mut QuizApp, ctx: &Context) {
    table_panel(ctx, 360.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Pregunta {}", app.board.question_number));
            ui.add_space(6.0);
            ui.label(RichText::new(&app.board.timer).size(32.0).monospace());
            ui.add_space(12.0);

            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                ui.label(RichText::new(&app.board.question_text).size(22.0));
            });

            ui.add_space(8.0);
            ui.label("Apúntala bien: las respuestas vienen después.");
            ui.add_space(16.0);

            let btn = ui.add_sized([260.0, 40.0], Button::new("📝 YA LA APUNTÉ, ¡SEGUIR!"));
            if btn.clicked() {
                app.game.on_proceed_to_answer_pressed(&mut app.board);
            }
        });
    });
}
