use super::*;
use crate::app::scoring::award_for_correct;
use crate::model::AnswerMark;
use std::time::Duration;

impl QuizGame {
    /// Click en la carta de respuesta que ocupa la posición `slot`.
    pub fn on_answer_card_chosen(&mut self, slot: usize, view: &mut dyn GameView) {
        match self.state.answer_cards.get(slot) {
            Some(card) => {
                let text = card.text.clone();
                self.on_answer_chosen(&text, view);
            }
            None => self.log_ignored("answer slot"),
        }
    }

    /// Procesa una respuesta por su texto. Un texto que no es ninguna opción
    /// cuenta como fallo.
    pub fn on_answer_chosen(&mut self, answer: &str, view: &mut dyn GameView) {
        if self.state.screen != Screen::Answer {
            self.log_ignored("answer");
            return;
        }

        let slot = self
            .state
            .answer_cards
            .iter()
            .position(|card| card.text == answer);

        if let Some(slot) = slot {
            let card = &mut self.state.answer_cards[slot];
            // Las cartas descartadas no responden
            if !card.is_selectable() {
                debug!("carta descartada {answer:?}");
                return;
            }
            card.selected = true;
            view.render_answer_card(slot, card);
        }

        if self.state.answered_correctly {
            return;
        }

        let correct = self
            .current_question()
            .is_some_and(|question| question.is_correct(answer));

        if correct {
            self.apply_correct_answer(slot, view);
        } else {
            self.apply_wrong_answer(slot, view);
        }
    }

    fn apply_wrong_answer(&mut self, slot: Option<usize>, view: &mut dyn GameView) {
        self.state.mistake_count += 1;
        view.render_mistake_count(self.state.mistake_count);
        view.render_feedback("❌ ¡Incorrecto! Esta carta queda descartada, prueba con otra.");

        if let Some(slot) = slot {
            let card = &mut self.state.answer_cards[slot];
            card.mark = AnswerMark::Wrong;
            view.render_answer_card(slot, card);
        }
        debug!("fallo número {}", self.state.mistake_count);
    }

    fn apply_correct_answer(&mut self, slot: Option<usize>, view: &mut dyn GameView) {
        self.cancel_countdown();

        let now = self.clock.now();
        let elapsed = self
            .state
            .question_start
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(Duration::ZERO);

        let award = award_for_correct(self.state.mistake_count, elapsed, &self.config.scoring);
        self.state.score = self.state.score.saturating_add(award.points);
        self.state.answered_correctly = true;
        self.log_award(&award);

        for (i, card) in self.state.answer_cards.iter_mut().enumerate() {
            if Some(i) == slot {
                card.mark = AnswerMark::Correct;
            } else if card.mark == AnswerMark::Open {
                card.mark = AnswerMark::Locked;
            }
            view.render_answer_card(i, card);
        }

        view.render_score(self.state.score);
        view.render_feedback(&award.feedback(self.state.mistake_count));

        self.schedule(Deferred::Advance, self.config.advance_delay());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;
    use crate::model::CardColor;

    #[derive(Default)]
    struct Silent {
        timeouts: Vec<u32>,
    }

    impl GameView for Silent {
        fn render_screen(&mut self, _: Screen) {}
        fn render_timer(&mut self, _: &str) {}
        fn render_score(&mut self, _: u32) {}
        fn render_mistake_count(&mut self, _: u32) {}
        fn render_feedback(&mut self, _: &str) {}
        fn render_question_card(&mut self, _: usize, _: usize, _: CardColor) {}
        fn reset_card_deck(&mut self, _: usize) {}
        fn render_question(&mut self, _: usize, _: &str) {}
        fn render_answer_options(&mut self, _: &[String]) {}
        fn render_answer_card(&mut self, _: usize, _: &AnswerCard) {}
        fn notify_timeout(&mut self, points: u32) {
            self.timeouts.push(points);
        }
        fn notify_game_over(&mut self, _: u32) {}
    }

    fn game_in_question() -> (QuizGame, Silent) {
        let questions = read_questions_embedded().expect("banco válido");
        let config = GameConfig {
            shuffle_seed: Some(7),
            ..GameConfig::default()
        };
        let mut game = QuizGame::with_clock(questions, config, Clock::manual());
        let mut view = Silent::default();
        game.on_start_pressed(&mut view);
        game.on_card_chosen(0, &mut view);
        game.clock_mut().advance(Duration::from_millis(1500));
        game.poll(&mut view);
        assert_eq!(game.state().screen, Screen::Question);
        (game, view)
    }

    #[test]
    fn timeout_after_correct_answer_awards_nothing() {
        let (mut game, mut view) = game_in_question();
        game.state.answered_correctly = true;
        game.state.score = 20;

        game.handle_timeout(&mut view);

        assert_eq!(game.state().score, 20);
        assert!(view.timeouts.is_empty());
        assert_eq!(game.state().current_question_index, 1);
    }

    #[test]
    fn timeout_without_answer_awards_five() {
        let (mut game, mut view) = game_in_question();

        game.handle_timeout(&mut view);

        assert_eq!(game.state().score, 5);
        assert_eq!(view.timeouts, vec![5]);
        assert!(!game.has_live_timer());
    }

    #[test]
    fn oversized_points_saturate_the_score() {
        let questions = read_questions_embedded().expect("banco válido");
        let mut config = GameConfig {
            shuffle_seed: Some(7),
            reveal_delay_secs: 1.0e18,
            ..GameConfig::default()
        };
        config.scoring.fast_points = u32::MAX;
        config.scoring.timeout_points = u32::MAX;
        let mut game = QuizGame::with_clock(questions, config, Clock::manual());
        let mut view = Silent::default();
        game.on_start_pressed(&mut view);

        // El retardo gigante se recorta: elegir carta no desborda el Instant
        game.on_card_chosen(0, &mut view);
        game.clock_mut().advance(crate::config::MAX_DELAY);
        game.poll(&mut view);
        game.on_proceed_to_answer_pressed(&mut view);
        game.on_answer_chosen("8", &mut view);
        assert_eq!(game.state().score, u32::MAX);

        game.state.answered_correctly = false;
        game.handle_timeout(&mut view);
        assert_eq!(game.state().score, u32::MAX);
    }

    #[test]
    fn answers_outside_answer_screen_are_ignored() {
        let (mut game, mut view) = game_in_question();
        game.on_answer_chosen("8", &mut view);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().mistake_count, 0);
    }
}
