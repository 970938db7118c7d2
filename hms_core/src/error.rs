use thiserror::Error;

use crate::PatientId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Patient store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Patient not found: {0}")]
    NotFound(PatientId),
}
