#![allow(dead_code)]

use card_quiz::GameConfig;
use card_quiz::QuizGame;
use card_quiz::app::GameView;
use card_quiz::clock::Clock;
use card_quiz::data::QuestionSet;
use card_quiz::model::{AnswerCard, CardColor, Question, Screen};
use std::time::Duration;

/// GameView que apunta todo lo que el juego le pide.
#[derive(Debug, Default)]
pub struct Recorder {
    pub screens: Vec<Screen>,
    pub timers: Vec<String>,
    pub scores: Vec<u32>,
    pub mistakes: Vec<u32>,
    pub feedback: Vec<String>,
    pub flipped: Vec<(usize, usize, CardColor)>,
    pub deck_resets: usize,
    pub questions: Vec<(usize, String)>,
    pub options: Vec<Vec<String>>,
    pub answer_cards: Vec<(usize, AnswerCard)>,
    pub timeouts: Vec<u32>,
    pub game_overs: Vec<u32>,
}

impl Recorder {
    pub fn last_screen(&self) -> Option<Screen> {
        self.screens.last().copied()
    }
}

impl GameView for Recorder {
    fn render_screen(&mut self, screen: Screen) {
        self.screens.push(screen);
    }
    fn render_timer(&mut self, mm_ss: &str) {
        self.timers.push(mm_ss.to_owned());
    }
    fn render_score(&mut self, score: u32) {
        self.scores.push(score);
    }
    fn render_mistake_count(&mut self, mistakes: u32) {
        self.mistakes.push(mistakes);
    }
    fn render_feedback(&mut self, message: &str) {
        self.feedback.push(message.to_owned());
    }
    fn render_question_card(&mut self, card_index: usize, number: usize, color: CardColor) {
        self.flipped.push((card_index, number, color));
    }
    fn reset_card_deck(&mut self, _card_count: usize) {
        self.deck_resets += 1;
    }
    fn render_question(&mut self, number: usize, text: &str) {
        self.questions.push((number, text.to_owned()));
    }
    fn render_answer_options(&mut self, options: &[String]) {
        self.options.push(options.to_vec());
    }
    fn render_answer_card(&mut self, slot: usize, card: &AnswerCard) {
        self.answer_cards.push((slot, card.clone()));
    }
    fn notify_timeout(&mut self, points: u32) {
        self.timeouts.push(points);
    }
    fn notify_game_over(&mut self, final_score: u32) {
        self.game_overs.push(final_score);
    }
}

/// `n` preguntas con opciones a/b/c/d; la correcta siempre es "c".
pub fn letter_questions(n: usize) -> QuestionSet {
    let questions = (0..n)
        .map(|i| Question {
            text: format!("Pregunta de prueba {}", i + 1),
            options: ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect(),
            correct_answer: "c".into(),
            color: CardColor::Blue,
        })
        .collect();
    QuestionSet::new(questions).expect("banco de prueba válido")
}

pub fn game_with(questions: QuestionSet) -> QuizGame {
    let config = GameConfig {
        shuffle_seed: Some(42),
        ..GameConfig::default()
    };
    QuizGame::with_clock(questions, config, Clock::manual())
}

/// Elige una carta y espera el retardo de volteo.
pub fn reveal(game: &mut QuizGame, view: &mut Recorder, card: usize) {
    game.on_card_chosen(card, view);
    let delay = game.config().reveal_delay();
    game.clock_mut().advance(delay);
    game.poll(view);
}

/// Deja pasar el tiempo sin repintar (sin ticks) y pasa a respuestas.
pub fn study_then_answer_screen(game: &mut QuizGame, view: &mut Recorder, secs: u64) {
    game.clock_mut().advance(Duration::from_secs(secs));
    game.on_proceed_to_answer_pressed(view);
}

/// Espera el retardo posterior al acierto.
pub fn wait_advance(game: &mut QuizGame, view: &mut Recorder) {
    let delay = game.config().advance_delay();
    game.clock_mut().advance(delay);
    game.poll(view);
}
