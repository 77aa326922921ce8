// src/data.rs

use crate::error::QuizError;
use crate::model::Question;
use std::collections::HashSet;

/// Número de cartas de respuesta en pantalla; cada pregunta trae exactamente estas opciones.
pub const ANSWER_SLOTS: usize = 4;

/// Banco ordenado de preguntas, validado al construirse.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        for (index, q) in questions.iter().enumerate() {
            if q.options.len() != ANSWER_SLOTS {
                return Err(QuizError::OptionCount {
                    index,
                    found: q.options.len(),
                    expected: ANSWER_SLOTS,
                });
            }

            let mut seen = HashSet::new();
            if let Some(dup) = q.options.iter().find(|o| !seen.insert(o.as_str())) {
                return Err(QuizError::DuplicateOption {
                    index,
                    option: dup.clone(),
                });
            }

            if !q.options.contains(&q.correct_answer) {
                return Err(QuizError::AnswerNotInOptions {
                    index,
                    answer: q.correct_answer.clone(),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_yaml::from_str(content)?;
        Self::new(questions)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionSet, QuizError> {
    let file_content = include_str!("data/questions.yaml");
    QuestionSet::from_yaml_str(file_content)
}
