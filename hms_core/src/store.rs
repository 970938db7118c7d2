use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{IdGenerator, Listing, Patient, PatientFields, PatientId, PatientRepo, StoreError};

/// Maximum number of records a store holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// Largest capacity a store accepts. Every successful add consumes one id
/// and ids are `u32`, so the counter can reach `capacity + 1` at most.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_CAPACITY: usize = (u32::MAX - 1) as usize;

/// Store sizing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "StoreConfig::default_capacity")]
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl StoreConfig {
    const fn default_capacity() -> usize {
        DEFAULT_CAPACITY
    }
}

/// In-memory, insertion-ordered patient records with a fixed capacity.
///
/// Ids are unique and strictly increasing in insertion order: they come
/// from the store's own [`IdGenerator`], and records are never removed or
/// reordered.
#[derive(Debug, Clone)]
pub struct PatientStore {
    records: Vec<Patient>,
    ids: IdGenerator,
    capacity: usize,
}

impl PatientStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Capacities above [`MAX_CAPACITY`] are clamped to it.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity > MAX_CAPACITY {
            warn!("Capacity {capacity} exceeds the id range, clamping to {MAX_CAPACITY}");
        }
        let capacity = capacity.min(MAX_CAPACITY);

        Self {
            records: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            ids: IdGenerator::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// The id the next successful add will receive.
    #[must_use]
    pub const fn next_id(&self) -> PatientId {
        self.ids.peek()
    }

    fn position(&self, id: PatientId) -> Option<usize> {
        self.records.iter().position(|p| p.id() == id)
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientRepo for PatientStore {
    fn add(&mut self, fields: PatientFields) -> Result<&Patient, StoreError> {
        if self.is_full() {
            warn!("Rejected add: store is full ({} records)", self.capacity);
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = self.ids.next_id();
        debug!("Adding patient {id}");
        self.records.push(Patient::new(id, fields));

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    fn list(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(&self.records)
        }
    }

    fn find_by_id(&self, id: PatientId) -> Result<&Patient, StoreError> {
        self.records
            .iter()
            .find(|p| p.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, id: PatientId, fields: PatientFields) -> Result<&Patient, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        debug!("Updating patient {id}");

        let patient = &mut self.records[index];
        patient.overwrite(fields);
        Ok(&*patient)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
