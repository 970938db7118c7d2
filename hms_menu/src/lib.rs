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

//! Interactive text menu over a [`hms_core::PatientRepo`].

mod command;
mod error;
mod prompt;
mod render;
mod session;

pub use command::{DEFAULT_TITLE, MenuChoice};
pub use error::{Error, Result};
pub use prompt::Prompter;
pub use render::write_patient;
pub use session::{Flow, MenuSession};
