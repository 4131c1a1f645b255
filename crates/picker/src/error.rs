use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("A recommendation is already in progress")]
    AlreadyInProgress,
}
