use crate::{Patient, PatientFields, PatientId, StoreError};

/// Result of listing the store: either nothing, or the records in
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    Records(&'a [Patient]),
}

impl<'a> Listing<'a> {
    #[must_use]
    pub const fn records(self) -> &'a [Patient] {
        match self {
            Self::Empty => &[],
            Self::Records(records) => records,
        }
    }
}

/// Operations the menu layer may perform on patient records.
pub trait PatientRepo {
    /// Append a new record with a freshly assigned id.
    ///
    /// Fails with [`StoreError::CapacityExceeded`] when the store is full; a
    /// failed add consumes no id.
    fn add(&mut self, fields: PatientFields) -> Result<&Patient, StoreError>;

    fn list(&self) -> Listing<'_>;

    fn find_by_id(&self, id: PatientId) -> Result<&Patient, StoreError>;

    /// Overwrite every field of the record with `id`; the id itself is kept.
    fn update(&mut self, id: PatientId, fields: PatientFields) -> Result<&Patient, StoreError>;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}
