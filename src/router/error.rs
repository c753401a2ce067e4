#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("duplicate registration: {0:?}")]
    Duplicate(String),

    #[error("route target must be \"handler#action\": {0:?}")]
    BadTarget(String),

    #[error("segment name can not be empty")]
    EmptySegment,
}
