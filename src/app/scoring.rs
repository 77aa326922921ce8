use crate::config::ScoringTable;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AwardTier {
    Fast,          // sin fallos y dentro del umbral
    Steady,        // sin fallos, fuera del umbral
    AfterMistakes,
    Timeout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Award {
    pub tier: AwardTier,
    pub points: u32,
}

/// Puntos por acertar. `elapsed` sale del reloj de pared, no de la cuenta atrás.
pub fn award_for_correct(mistakes: u32, elapsed: Duration, table: &ScoringTable) -> Award {
    if mistakes > 0 {
        return Award {
            tier: AwardTier::AfterMistakes,
            points: table.after_mistakes_points,
        };
    }

    if elapsed.as_secs_f64() <= table.fast_threshold_secs {
        Award {
            tier: AwardTier::Fast,
            points: table.fast_points,
        }
    } else {
        Award {
            tier: AwardTier::Steady,
            points: table.steady_points,
        }
    }
}

pub fn award_for_timeout(table: &ScoringTable) -> Award {
    Award {
        tier: AwardTier::Timeout,
        points: table.timeout_points,
    }
}

impl Award {
    pub fn feedback(&self, mistakes: u32) -> String {
        match self.tier {
            AwardTier::Fast => format!("✅ ¡CORRECTO! +{} puntos. ¡Qué rapidez!", self.points),
            AwardTier::Steady => format!("✅ ¡CORRECTO! +{} puntos.", self.points),
            AwardTier::AfterMistakes => format!(
                "✅ Correcto tras {} fallo(s). +{} puntos.",
                mistakes, self.points
            ),
            AwardTier::Timeout => format!(
                "⏰ ¡Tiempo agotado! Pregunta saltada. +{} puntos.",
                self.points
            ),
        }
    }
}
