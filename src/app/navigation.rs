use super::*;
use crate::app::scoring::award_for_timeout;
use rand::seq::SliceRandom;

impl QuizGame {
    /// Botón EMPEZAR.
    pub fn on_start_pressed(&mut self, view: &mut dyn GameView) {
        if self.state.screen != Screen::Start {
            self.log_ignored("start");
            return;
        }

        self.cancel_countdown();
        self.pending = None;
        self.state = GameState {
            screen: Screen::CardSelection,
            ..GameState::default()
        };
        info!("nueva partida con {} preguntas", self.questions.len());

        view.render_score(0);
        view.render_mistake_count(0);
        view.reset_card_deck(self.config.card_count);
        view.render_screen(Screen::CardSelection);
    }

    /// Click en una de las cartas boca abajo.
    pub fn on_card_chosen(&mut self, card_index: usize, view: &mut dyn GameView) {
        if self.is_finished() {
            self.log_ignored("card (partida terminada)");
            return;
        }
        if self.state.screen != Screen::CardSelection || self.state.deck_locked {
            self.log_ignored("card");
            return;
        }
        if card_index >= self.config.card_count {
            warn!(
                "carta {card_index} fuera del mazo (hay {})",
                self.config.card_count
            );
            return;
        }
        let Some(question) = self.questions.get(self.state.current_question_index) else {
            return;
        };
        let number = self.state.current_question_index + 1;
        let color = question.color;

        // Ninguna otra carta se puede elegir hasta la siguiente pregunta
        self.state.deck_locked = true;
        view.render_question_card(card_index, number, color);
        debug!("carta {card_index} volteada: pregunta {number}");

        self.schedule(Deferred::RevealQuestion, self.config.reveal_delay());
    }

    /// Tras el retardo de volteo: muestra el enunciado y arranca la cuenta atrás.
    pub(super) fn reveal_question(&mut self, view: &mut dyn GameView) {
        if self.state.screen != Screen::CardSelection {
            self.log_ignored("reveal");
            return;
        }
        let Some(question) = self.questions.get(self.state.current_question_index) else {
            return;
        };

        view.render_question(self.state.current_question_index + 1, &question.text);
        self.state.screen = Screen::Question;
        view.render_screen(Screen::Question);

        self.state.question_start = Some(self.clock.now());
        self.start_countdown(view);
    }

    /// Botón YA LO TENGO, SEGUIR.
    pub fn on_proceed_to_answer_pressed(&mut self, view: &mut dyn GameView) {
        if self.state.screen != Screen::Question {
            self.log_ignored("proceed");
            return;
        }

        self.cancel_countdown();
        self.state.screen = Screen::Answer;
        view.render_screen(Screen::Answer);
        self.show_answers(view);
    }

    /// Baraja las opciones de la pregunta actual y las reparte en las cartas.
    fn show_answers(&mut self, view: &mut dyn GameView) {
        let Some(question) = self.questions.get(self.state.current_question_index) else {
            return;
        };

        let mut options = question.options.clone();
        options.shuffle(&mut self.rng);

        self.state.answer_cards = options.iter().map(|o| AnswerCard::new(o.as_str())).collect();
        view.render_answer_options(&options);
        view.render_feedback("¡Elige tu mejor respuesta!");
    }

    pub(super) fn start_countdown(&mut self, view: &mut dyn GameView) {
        if self.timer.is_some() {
            debug!("cancelando cuenta atrás previa");
        }
        let countdown = Countdown::start(self.config.countdown_secs, self.clock.now());
        view.render_timer(&countdown.display());
        self.timer = Some(countdown);
    }

    pub(super) fn cancel_countdown(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("cuenta atrás detenida con {} s restantes", timer.remaining());
        }
    }

    /// La cuenta atrás llegó a cero.
    pub(super) fn handle_timeout(&mut self, view: &mut dyn GameView) {
        self.cancel_countdown();

        if self.state.answered_correctly {
            debug!("tiempo agotado tras acertar: sin puntos");
        } else {
            let award = award_for_timeout(&self.config.scoring);
            self.state.score = self.state.score.saturating_add(award.points);
            self.log_award(&award);
            view.render_score(self.state.score);
            view.render_feedback(&award.feedback(self.state.mistake_count));
            view.notify_timeout(award.points);
        }

        self.advance_question(view);
    }

    /// Pasa a la siguiente pregunta o termina la partida.
    pub(super) fn advance_question(&mut self, view: &mut dyn GameView) {
        self.cancel_countdown();
        self.pending = None;
        self.state.current_question_index += 1;

        if self.is_finished() {
            self.finish_game(view);
            return;
        }

        self.reset_question_state();
        view.render_mistake_count(0);
        view.reset_card_deck(self.config.card_count);
        self.state.screen = Screen::CardSelection;
        view.render_screen(Screen::CardSelection);
        debug!("pregunta {} lista", self.state.current_question_index + 1);
    }

    /// Fin de partida. Puntuación e índice quedan como estaban hasta el
    /// siguiente EMPEZAR; lo demás vuelve al estado inicial.
    fn finish_game(&mut self, view: &mut dyn GameView) {
        self.cancel_countdown();
        self.pending = None;
        self.reset_question_state();
        self.state.screen = Screen::Start;

        info!("partida terminada: {} puntos", self.state.score);
        view.notify_game_over(self.state.score);
        view.render_mistake_count(0);
        view.reset_card_deck(self.config.card_count);
        view.render_screen(Screen::Start);
    }

    fn reset_question_state(&mut self) {
        self.state.mistake_count = 0;
        self.state.answered_correctly = false;
        self.state.question_start = None;
        self.state.deck_locked = false;
        self.state.answer_cards.clear();
    }
}
