use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("el banco de preguntas está vacío")]
    EmptyQuestionSet,

    #[error("la pregunta {index} tiene {found} opciones (se esperan {expected})")]
    OptionCount {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("la pregunta {index} repite la opción {option:?}")]
    DuplicateOption { index: usize, option: String },

    #[error("la respuesta correcta de la pregunta {index} ({answer:?}) no está entre las opciones")]
    AnswerNotInOptions { index: usize, answer: String },

    #[error("YAML inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no se pudo leer {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
