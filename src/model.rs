use serde::{Deserialize, Serialize};

/// Color de la carta que esconde la pregunta. El núcleo no lo interpreta,
/// sólo lo pasa a la UI.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Blue,
    Green,
    Yellow,
    Red,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,         // Enunciado
    pub options: Vec<String>, // Opciones en el orden del banco
    pub correct_answer: String,
    pub color: CardColor,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    CardSelection,
    Question,
    Answer,
}

/// Estado visual de una carta de respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnswerMark {
    #[default]
    Open,
    Wrong,   // descartada, ya no se puede elegir
    Correct,
    Locked,  // bloqueada tras acertar
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerCard {
    pub text: String,
    pub mark: AnswerMark,
    pub selected: bool,
}

impl AnswerCard {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mark: AnswerMark::Open,
            selected: false,
        }
    }

    /// Sólo las descartadas dejan de responder; acertadas y bloqueadas aún
    /// aceptan el click (marca de selección).
    pub fn is_selectable(&self) -> bool {
        self.mark != AnswerMark::Wrong
    }
}
