use hms_core::{Listing, PatientId, PatientRepo};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info};

use crate::{DEFAULT_TITLE, Error, MenuChoice, Prompter, Result, write_patient};

/// What the loop should do after handling a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Result of reading a patient id from the user.
enum IdAnswer {
    Id(PatientId),
    /// Numeric, but no record could ever carry it.
    Unassignable,
    Invalid,
}

/// The menu loop: shows the choices, reads a selection and dispatches to
/// the repository until the user exits or the input ends.
pub struct MenuSession<S, R, W> {
    store: S,
    prompter: Prompter<R, W>,
    title: String,
}

impl<S, R, W> MenuSession<S, R, W>
where
    S: PatientRepo,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, W) {
        (self.store, self.prompter.into_output())
    }

    /// Run until the exit choice or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("Menu session started (capacity {})", self.store.capacity());

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(Error::InputClosed) => {
                    info!("Input closed, leaving menu");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Menu session ended with {} records", self.store.len());
        Ok(())
    }

    /// Show the menu once, read one choice and handle it.
    pub fn step(&mut self) -> Result<Flow> {
        let menu = MenuChoice::menu_text(&self.title);
        write!(self.prompter.output(), "{menu}")?;

        let answer = self.prompter.ask("Enter your choice: ")?;
        match MenuChoice::parse_from_text(&answer) {
            Some(choice) => self.handle(choice),
            None => {
                debug!("Unrecognised menu choice: {answer:?}");
                self.prompter.say("Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!("Menu choice: {choice:?}");

        match choice {
            MenuChoice::Add => self.add_patient()?,
            MenuChoice::List => self.display_patients()?,
            MenuChoice::Search => self.search_patient()?,
            MenuChoice::Modify => self.modify_patient()?,
            MenuChoice::Exit => {
                self.prompter.say("Exiting program.")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn add_patient(&mut self) -> Result<()> {
        if self.store.is_full() {
            let capacity = self.store.capacity();
            self.prompter
                .say(&format!("Patient database is full (capacity {capacity})."))?;
            return Ok(());
        }

        self.prompter.say("Enter patient details:")?;
        let fields = self.prompter.ask_fields()?;
        let id = self.store.add(fields)?.id();

        info!("Added patient {id}");
        self.prompter
            .say(&format!("Patient added successfully! Patient ID: {id}"))
    }

    fn display_patients(&mut self) -> Result<()> {
        let Listing::Records(records) = self.store.list() else {
            return self.prompter.say("No patients to display.");
        };

        let out = self.prompter.output();
        writeln!(out, "List of Patients:")?;
        for patient in records {
            write_patient(out, patient)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn search_patient(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.prompter.say("No patients to search.");
        }

        let id = match self.ask_id("Enter the Patient ID to search: ")? {
            IdAnswer::Id(id) => id,
            IdAnswer::Unassignable => return self.prompter.say("Patient not found."),
            IdAnswer::Invalid => return self.prompter.say("Invalid patient ID."),
        };

        match self.store.find_by_id(id) {
            Ok(patient) => {
                let out = self.prompter.output();
                writeln!(out, "Patient found!")?;
                write_patient(out, patient)?;
                Ok(())
            }
            Err(e) => {
                debug!("{e}");
                self.prompter.say("Patient not found.")
            }
        }
    }

    fn modify_patient(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.prompter.say("No patients to modify.");
        }

        let id = match self.ask_id("Enter the Patient ID to modify: ")? {
            IdAnswer::Id(id) => id,
            IdAnswer::Unassignable => return self.prompter.say("Patient not found."),
            IdAnswer::Invalid => return self.prompter.say("Invalid patient ID."),
        };

        if let Err(e) = self.store.find_by_id(id) {
            debug!("{e}");
            return self.prompter.say("Patient not found.");
        }

        self.prompter
            .say(&format!("Enter new details for Patient ID {id}:"))?;
        let fields = self.prompter.ask_fields()?;
        self.store.update(id, fields)?;

        info!("Modified patient {id}");
        self.prompter.say("Patient details modified successfully!")
    }

    fn ask_id(&mut self, prompt: &str) -> Result<IdAnswer> {
        let answer = self.prompter.ask(prompt)?;

        let err = match answer.parse::<PatientId>() {
            Ok(id) => return Ok(IdAnswer::Id(id)),
            Err(err) => err,
        };

        // Numbers no record can carry count as not found, not as bad input.
        let negative = answer.strip_prefix('-').is_some_and(|digits| {
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        });
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Ok(IdAnswer::Unassignable),
            _ if negative => Ok(IdAnswer::Unassignable),
            _ => Ok(IdAnswer::Invalid),
        }
    }
}
