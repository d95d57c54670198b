use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} token '{token}'")]
pub struct ParseTokenError {
    pub kind: &'static str,
    pub token: String,
}

impl ParseTokenError {
    pub fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}
