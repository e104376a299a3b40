use thiserror::Error;

/// Ошибки компиляции списочного запроса
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListQueryError {
    /// Пагинация вне допустимого диапазона
    #[error("Invalid pagination: {0}")]
    Validation(String),

    /// Значение фильтра нельзя представить строкой (объект, вложенный массив)
    #[error("Cannot encode value of filter '{field}': {reason}")]
    Encoding { field: String, reason: String },

    #[error("Unknown list endpoint: {0}")]
    UnknownEndpoint(String),
}
