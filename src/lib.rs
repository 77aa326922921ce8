pub mod app;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod ui;

pub use app::QuizGame;
pub use config::GameConfig;
pub use error::QuizError;
pub use ui::QuizApp;

/// Variable de entorno con la ruta a un YAML de configuración (sólo nativo).
pub const CONFIG_ENV: &str = "CARD_QUIZ_CONFIG";

/// Configuración efectiva: el YAML de `CARD_QUIZ_CONFIG` si existe y es
/// válido, si no los valores por defecto.
pub fn load_config() -> GameConfig {
    config_from_env().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn config_from_env() -> Option<GameConfig> {
    let path = std::env::var(CONFIG_ENV).ok()?;
    match GameConfig::from_file(&path) {
        Ok(cfg) => {
            log::info!("configuración cargada de {path}");
            Some(cfg)
        }
        Err(e) => {
            log::warn!("configuración ignorada: {e}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn config_from_env() -> Option<GameConfig> {
    None
}

/// Juego listo para jugar con el banco de preguntas embebido.
pub fn build_game(config: GameConfig) -> Result<QuizGame, QuizError> {
    let questions = data::read_questions_embedded()?;
    Ok(QuizGame::new(questions, config))
}
