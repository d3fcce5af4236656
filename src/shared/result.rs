use super::error::TotemError;

pub type AppResult<T> = Result<T, TotemError>;
