use crate::clock::Clock;
use crate::config::GameConfig;
use crate::data::QuestionSet;
use crate::model::{AnswerCard, Question, Screen};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use web_time::Instant;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod schedule;
pub mod scoring;
pub mod timer;
pub mod view;

pub use schedule::{Deferred, Pending};
pub use scoring::{Award, AwardTier};
pub use timer::{Countdown, Tick, format_mm_ss};
pub use view::GameView;

/// Estado mutable de una partida.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub score: u32,
    pub mistake_count: u32,           // sólo de la pregunta actual
    pub answered_correctly: bool,
    pub current_question_index: usize,
    pub question_start: Option<Instant>,
    pub screen: Screen,
    pub deck_locked: bool,            // mazo bloqueado tras elegir carta
    pub answer_cards: Vec<AnswerCard>, // orden barajado de la pantalla de respuestas
}

/// Controlador del juego: única pieza que modifica `GameState`.
pub struct QuizGame {
    questions: QuestionSet,
    config: GameConfig,
    state: GameState,
    timer: Option<Countdown>,
    pending: Option<Pending>,
    clock: Clock,
    rng: StdRng,
}

impl QuizGame {
    pub fn new(questions: QuestionSet, config: GameConfig) -> Self {
        Self::with_clock(questions, config, Clock::System)
    }

    pub fn with_clock(questions: QuestionSet, config: GameConfig, clock: Clock) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        if config.card_count == 0 {
            warn!("card_count = 0: no habrá cartas que elegir");
        }

        Self {
            questions,
            config,
            state: GameState::default(),
            timer: None,
            pending: None,
            clock,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.state.current_question_index)
    }

    pub fn is_finished(&self) -> bool {
        self.state.current_question_index >= self.questions.len()
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.as_ref().map(Countdown::remaining)
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Avanza el juego hasta el instante actual del reloj: dispara, por orden,
    /// los ticks de la cuenta atrás y las acciones diferidas que ya tocan.
    /// La UI lo llama en cada frame. No mezclar con `on_timer_tick`.
    pub fn poll(&mut self, view: &mut dyn GameView) {
        let now = self.clock.now();
        loop {
            let tick_due = self
                .timer
                .as_ref()
                .map(Countdown::next_tick_at)
                .filter(|at| *at <= now);
            let pending_due = self
                .pending
                .as_ref()
                .filter(|p| p.is_due(now))
                .map(|p| p.due);

            match (tick_due, pending_due) {
                (None, None) => break,
                (Some(tick), Some(due)) if due <= tick => self.fire_pending(view),
                (Some(_), _) => self.on_timer_tick(view),
                (None, Some(_)) => self.fire_pending(view),
            }
        }
    }

    /// Un tick de un segundo. Para anfitriones que llevan su propio intervalo.
    pub fn on_timer_tick(&mut self, view: &mut dyn GameView) {
        let Some(timer) = self.timer.as_mut() else {
            debug!("tick ignorado: no hay cuenta atrás activa");
            return;
        };

        let tick = timer.tick();
        view.render_timer(&timer.display());

        if tick == Tick::Expired {
            self.timer = None;
            self.handle_timeout(view);
        }
    }

    fn fire_pending(&mut self, view: &mut dyn GameView) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        debug!("acción diferida {:?}", pending.action);
        match pending.action {
            Deferred::RevealQuestion => self.reveal_question(view),
            Deferred::Advance => self.advance_question(view),
        }
    }

    fn schedule(&mut self, action: Deferred, delay: std::time::Duration) {
        if let Some(prev) = self.pending.replace(Pending {
            action,
            due: self.clock.now() + delay,
        }) {
            warn!("se descarta la acción pendiente {:?}", prev.action);
        }
    }

    pub(crate) fn log_ignored(&self, event: &str) {
        debug!(
            "evento {event} ignorado en {:?} (pregunta {})",
            self.state.screen, self.state.current_question_index
        );
    }

    fn log_award(&self, award: &Award) {
        info!(
            "pregunta {}: {:?} +{} (total {})",
            self.state.current_question_index + 1,
            award.tier,
            award.points,
            self.state.score
        );
    }
}
