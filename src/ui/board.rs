// src/ui/board.rs
//
// Lo que las vistas de egui pintan. El juego lo rellena a través de GameView.

use crate::app::GameView;
use crate::model::{AnswerCard, CardColor, Screen};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeckCard {
    #[default]
    FaceDown,
    FaceUp { number: usize, color: CardColor },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Timeout(u32),
    GameOver(u32),
}

#[derive(Debug, Default)]
pub struct Board {
    pub screen: Screen,
    pub timer: String,
    pub score: u32,
    pub mistakes: u32,
    pub feedback: String,
    pub deck: Vec<DeckCard>,
    pub question_number: usize,
    pub question_text: String,
    pub answers: Vec<AnswerCard>,
    pub notices: VecDeque<Notice>, // avisos pendientes, en orden de llegada
}

impl Board {
    pub fn new(card_count: usize) -> Self {
        Self {
            timer: "--:--".into(),
            deck: vec![DeckCard::FaceDown; card_count],
            ..Self::default()
        }
    }

    pub fn current_notice(&self) -> Option<Notice> {
        self.notices.front().copied()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Con una carta ya volteada no se puede elegir otra.
    pub fn deck_locked(&self) -> bool {
        self.deck.iter().any(|c| matches!(c, DeckCard::FaceUp { .. }))
    }
}

impl GameView for Board {
    fn render_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn render_timer(&mut self, mm_ss: &str) {
        self.timer = mm_ss.to_owned();
    }

    fn render_score(&mut self, score: u32) {
        self.score = score;
    }

    fn render_mistake_count(&mut self, mistakes: u32) {
        self.mistakes = mistakes;
    }

    fn render_feedback(&mut self, message: &str) {
        self.feedback = message.to_owned();
    }

    fn render_question_card(&mut self, card_index: usize, number: usize, color: CardColor) {
        if let Some(card) = self.deck.get_mut(card_index) {
            *card = DeckCard::FaceUp { number, color };
        }
    }

    fn reset_card_deck(&mut self, card_count: usize) {
        self.deck = vec![DeckCard::FaceDown; card_count];
    }

    fn render_question(&mut self, number: usize, text: &str) {
        self.question_number = number;
        self.question_text = text.to_owned();
    }

    fn render_answer_options(&mut self, options: &[String]) {
        self.answers = options.iter().map(|o| AnswerCard::new(o.as_str())).collect();
    }

    fn render_answer_card(&mut self, slot: usize, card: &AnswerCard) {
        if let Some(shown) = self.answers.get_mut(slot) {
            *shown = card.clone();
        }
    }

    fn notify_timeout(&mut self, points: u32) {
        self.notices.push_back(Notice::Timeout(points));
    }

    fn notify_game_over(&mut self, final_score: u32) {
        self.notices.push_back(Notice::GameOver(final_score));
    }
}
