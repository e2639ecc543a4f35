use thiserror::Error;

/// Ошибки проверки конфигурации компонентов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{component}: field `{field}` must not be empty")]
    EmptyField {
        component: &'static str,
        field: &'static str,
    },

    #[error("{component}: invalid `{field}`: {reason}")]
    InvalidValue {
        component: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("page `{page}`: slider selector `{selector}` is configured twice")]
    DuplicateSelector { page: String, selector: String },
}
