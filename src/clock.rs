use std::time::Duration;
use web_time::Instant;

/// Reloj de pared del juego. `Manual` sirve para tests y repeticiones: sólo
/// avanza cuando se le pide.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Manual { origin: Instant, offset: Duration },
}

impl Clock {
    pub fn manual() -> Self {
        Clock::Manual {
            origin: Instant::now(),
            offset: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Instant {
        match self {
            Clock::System => Instant::now(),
            Clock::Manual { origin, offset } => *origin + *offset,
        }
    }

    /// No tiene efecto sobre `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual { offset, .. } = self {
            *offset += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let mut clock = Clock::manual();
        let t0 = clock.now();
        assert_eq!(clock.now(), t0);
        clock.advance(Duration::from_millis(1500));
        assert_eq!(clock.now() - t0, Duration::from_millis(1500));
    }
}
