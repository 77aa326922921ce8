use crate::model::Screen;
use crate::ui::board::Board;
use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

/// Marcador: puntos, fallos y tiempo restante.
pub fn top_panel(board: &Board, ctx: &Context) {
    egui::TopBottomPanel::top("score_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(format!("⭐ Puntos: {}", board.score)).strong());
            ui.separator();
            ui.label(format!("❌ Fallos: {}", board.mistakes));
            ui.separator();
            ui.label(RichText::new(format!("⏱ {}", board.timer)).monospace());
        });
    });
}

/// Barra inferior: progreso de la partida a la izquierda, cambio de tema a la derecha.
pub fn status_bar(ctx: &Context, board: &Board, answered: usize, total: usize) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(status_line(board, answered, total)).small());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Tema claro" } else { "🌙 Tema oscuro" };
                if ui.small_button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

fn status_line(board: &Board, answered: usize, total: usize) -> String {
    if board.screen == Screen::Start {
        format!("{total} preguntas en el mazo")
    } else {
        format!("Pregunta {} de {total} · {} puntos", (answered + 1).min(total), board.score)
    }
}

/// Tapete central: un marco redondeado, centrado en ambos ejes, de ancho
/// máximo `max_width`. `est_height` es la altura aproximada del contenido.
pub fn table_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let pad = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(pad);
        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .fill(ui.visuals().window_fill())
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(max_width));
                    inner(ui);
                });
        });
    });
}
