use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a patient when the record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientId(pub u32);

impl PatientId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Everything about a patient except the id.
///
/// Used both for creating a record and for overwriting one; there is no
/// partial update, all five fields travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientFields {
    pub name: String,
    pub age: i32,
    pub gender: char,
    pub address: String,
    pub disease: String,
}

impl PatientFields {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: i32,
        gender: char,
        address: impl Into<String>,
        disease: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            address: address.into(),
            disease: disease.into(),
        }
    }
}

/// A stored patient record.
///
/// The id is fixed at construction; only the store can build or rewrite a
/// record, and rewriting replaces the fields while the id stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientId,
    fields: PatientFields,
}

impl Patient {
    pub(crate) const fn new(id: PatientId, fields: PatientFields) -> Self {
        Self { id, fields }
    }

    pub(crate) fn overwrite(&mut self, fields: PatientFields) {
        self.fields = fields;
    }

    #[must_use]
    pub const fn id(&self) -> PatientId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    #[must_use]
    pub const fn age(&self) -> i32 {
        self.fields.age
    }

    #[must_use]
    pub const fn gender(&self) -> char {
        self.fields.gender
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.fields.address
    }

    #[must_use]
    pub fn disease(&self) -> &str {
        &self.fields.disease
    }

    #[must_use]
    pub const fn fields(&self) -> &PatientFields {
        &self.fields
    }
}
