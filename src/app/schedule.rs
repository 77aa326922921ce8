use web_time::Instant;

/// Acciones diferidas de un solo disparo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    RevealQuestion,
    Advance,
}

#[derive(Clone, Copy, Debug)]
pub struct Pending {
    pub action: Deferred,
    pub due: Instant,
}

impl Pending {
    pub fn is_due(&self, now: Instant) -> bool {
        self.due <= now
    }
}
