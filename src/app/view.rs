use crate::model::{AnswerCard, CardColor, Screen};

/// Lo que el juego le pide a la interfaz. La UI de egui lo implementa en
/// `ui::Board`; los tests usan un grabador.
pub trait GameView {
    fn render_screen(&mut self, screen: Screen);
    fn render_timer(&mut self, mm_ss: &str);
    fn render_score(&mut self, score: u32);
    fn render_mistake_count(&mut self, mistakes: u32);
    fn render_feedback(&mut self, message: &str);

    /// Voltea la carta elegida mostrando el número de pregunta y su color.
    fn render_question_card(&mut self, card_index: usize, number: usize, color: CardColor);
    /// Vuelve a poner todas las cartas boca abajo y habilitadas.
    fn reset_card_deck(&mut self, card_count: usize);

    fn render_question(&mut self, number: usize, text: &str);
    fn render_answer_options(&mut self, options: &[String]);
    fn render_answer_card(&mut self, slot: usize, card: &AnswerCard);

    fn notify_timeout(&mut self, points: u32);
    fn notify_game_over(&mut self, final_score: u32);
}
