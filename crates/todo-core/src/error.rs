use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo is disabled: set 'enabled: true' in the config file")]
    Disabled,

    #[error("todo text must not be empty")]
    EmptyText,

    #[error("limit {0} out of range: must be between 1 and {max}", max = crate::todos::MAX_STATUS_LIMIT)]
    LimitOutOfRange(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
