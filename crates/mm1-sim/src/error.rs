use mm1_core::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Queue(#[from] QueueError),
}

impl SimError {
    /// `true` for a rejected mean, horizon or window.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimError::Queue(QueueError::InvalidParameter { .. }))
    }
}

pub type SimResult<T> = Result<T, SimError>;
