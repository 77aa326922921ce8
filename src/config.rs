use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Puntos de cada tramo de puntuación.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringTable {
    pub fast_threshold_secs: f64, // inclusivo
    pub fast_points: u32,
    pub steady_points: u32,
    pub after_mistakes_points: u32,
    pub timeout_points: u32,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            fast_threshold_secs: 180.0,
            fast_points: 20,
            steady_points: 10,
            after_mistakes_points: 8,
            timeout_points: 5,
        }
    }
}

/// Constantes del juego. Todos los campos tienen valor por defecto, así que un
/// YAML parcial sólo sobrescribe lo que menciona.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub countdown_secs: u32,
    pub reveal_delay_secs: f64,
    pub advance_delay_secs: f64,
    pub card_count: usize,
    pub shuffle_seed: Option<u64>,
    pub scoring: ScoringTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 360,
            reveal_delay_secs: 1.5,
            advance_delay_secs: 2.0,
            card_count: 3,
            shuffle_seed: None,
            scoring: ScoringTable::default(),
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, QuizError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: &str) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn reveal_delay(&self) -> Duration {
        secs(self.reveal_delay_secs)
    }

    pub fn advance_delay(&self) -> Duration {
        secs(self.advance_delay_secs)
    }
}

/// Tope de los retardos; por encima se recorta para que `Instant + retardo` no desborde.
pub const MAX_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

// Negativos o NaN valen cero; los enormes se recortan a MAX_DELAY
fn secs(value: f64) -> Duration {
    if value.is_nan() || value <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(value)
        .unwrap_or(MAX_DELAY)
        .min(MAX_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = GameConfig::from_yaml_str("countdown_secs: 30\nscoring:\n  fast_points: 50\n")
            .expect("yaml válido");
        assert_eq!(cfg.countdown_secs, 30);
        assert_eq!(cfg.scoring.fast_points, 50);
        assert_eq!(cfg.scoring.timeout_points, 5);
        assert_eq!(cfg.card_count, 3);
        assert_eq!(cfg.reveal_delay(), Duration::from_millis(1500));
        assert_eq!(cfg.advance_delay(), Duration::from_secs(2));
    }

    #[test]
    fn negative_delay_is_zero() {
        let cfg = GameConfig {
            reveal_delay_secs: -1.0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.reveal_delay(), Duration::ZERO);
    }

    #[test]
    fn huge_delays_are_clamped() {
        let cfg = GameConfig::from_yaml_str("reveal_delay_secs: 1.0e18\nadvance_delay_secs: 7200000.0\n")
            .expect("yaml válido");
        assert_eq!(cfg.reveal_delay(), MAX_DELAY);
        assert_eq!(cfg.advance_delay(), MAX_DELAY);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::from_file("no/existe.yaml").unwrap_err();
        assert!(err.to_string().contains("no/existe.yaml"));
    }
}
