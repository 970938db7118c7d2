#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod ids;
pub mod patient;
pub mod repository;
pub mod store;

pub use error::StoreError;
pub use ids::IdGenerator;
pub use patient::{Patient, PatientFields, PatientId};
pub use repository::{Listing, PatientRepo};
pub use store::{DEFAULT_CAPACITY, MAX_CAPACITY, PatientStore, StoreConfig};
