pub mod board;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizGame;
use crate::model::Screen;
use board::{Board, Notice};
use eframe::{App, Frame};
use egui::{Align2, Context, RichText};
use layout::{status_bar, top_panel};
use std::time::Duration;

/// Cada cuánto se repinta aunque no haya input, para que avance el reloj.
const REPAINT_EVERY: Duration = Duration::from_millis(100);

pub struct QuizApp {
    pub game: QuizGame,
    pub board: Board,
}

impl QuizApp {
    pub fn new(game: QuizGame) -> Self {
        let board = Board::new(game.config().card_count);
        Self { game, board }
    }

    /// Aviso modal de tiempo agotado / fin de partida. Si hay varios en cola
    /// se muestran de uno en uno.
    fn show_notice(&mut self, ctx: &Context) {
        let Some(notice) = self.board.current_notice() else {
            return;
        };

        let (title, message) = match notice {
            Notice::Timeout(points) => (
                "⏰ Tiempo agotado",
                format!("¡Se acabó el tiempo! Pregunta saltada. +{points} puntos."),
            ),
            Notice::GameOver(score) => (
                "🏁 Fin de la partida",
                format!("¡Partida terminada! Puntuación final: {score}"),
            ),
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(message).heading());
                ui.add_space(8.0);
                if ui.button("Aceptar").clicked() {
                    self.board.dismiss_notice();
                }
            });
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Primero el reloj: ticks y acciones diferidas que ya tocan
        self.game.poll(&mut self.board);

        if self.board.screen != Screen::Start {
            top_panel(&self.board, ctx);
        }

        status_bar(
            ctx,
            &self.board,
            self.game.state().current_question_index,
            self.game.questions().len(),
        );

        match self.board.screen {
            Screen::Start => views::start::ui_start(self, ctx),
            Screen::CardSelection => views::card_selection::ui_card_selection(self, ctx),
            Screen::Question => views::question::ui_question(self, ctx),
            Screen::Answer => views::answer::ui_answer(self, ctx),
        }

        self.show_notice(ctx);
        ctx.request_repaint_after(REPAINT_EVERY);
    }
}
