use std::time::Duration;
use web_time::Instant;

const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    Expired,
}

/// Cuenta atrás de un segundo por tick. El juego guarda como mucho una en
/// `QuizGame::timer`; soltarla es cancelarla.
#[derive(Clone, Debug)]
pub struct Countdown {
    remaining: u32,
    next_tick: Instant,
}

impl Countdown {
    pub fn start(secs: u32, now: Instant) -> Self {
        Self {
            remaining: secs,
            next_tick: now + TICK,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn next_tick_at(&self) -> Instant {
        self.next_tick
    }

    pub fn display(&self) -> String {
        format_mm_ss(self.remaining)
    }

    pub fn tick(&mut self) -> Tick {
        self.remaining = self.remaining.saturating_sub(1);
        self.next_tick += TICK;
        if self.remaining == 0 {
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }
}

/// `MM:SS` con ceros a la izquierda; los minutos no se acotan a 59.
pub fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_mm_ss(360), "06:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(6000), "100:00");
    }

    #[test]
    fn expires_on_the_tick_reaching_zero() {
        let now = Instant::now();
        let mut countdown = Countdown::start(3, now);
        assert_eq!(countdown.display(), "00:03");
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.next_tick_at(), now + Duration::from_secs(4));
    }

    #[test]
    fn zero_length_countdown_expires_on_first_tick() {
        let mut countdown = Countdown::start(0, Instant::now());
        assert_eq!(countdown.tick(), Tick::Expired);
    }
}
