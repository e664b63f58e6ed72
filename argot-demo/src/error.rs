use argot::{CoerceError, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("one of the arguments was declared incorrectly: {0}")]
    Config(#[from] ConfigError),

    #[error("argument contained invalid UTF8: {0:?}")]
    InvalidUtf8(String),

    #[error("unrecognized argument {0:?}")]
    Unrecognized(String),

    #[error("{0} requires a value")]
    NeedArg(String),

    #[error("required argument {0} was absent")]
    Required(String),

    #[error(transparent)]
    Coerce(#[from] CoerceError),
}

impl DemoError {
    /// Choice violations carry their own exit code; everything else is a
    /// usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Coerce(error) => error.exit_code(),
            _ => 2,
        }
    }
}
