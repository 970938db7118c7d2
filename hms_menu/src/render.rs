use hms_core::Patient;
use std::io::{self, Write};

/// Write one record as labelled lines.
pub fn write_patient<W: Write + ?Sized>(out: &mut W, patient: &Patient) -> io::Result<()> {
    writeln!(out, "Patient ID: {}", patient.id())?;
    writeln!(out, "Name: {}", patient.name())?;
    writeln!(out, "Age: {}", patient.age())?;
    writeln!(out, "Gender: {}", patient.gender())?;
    writeln!(out, "Address: {}", patient.address())?;
    writeln!(out, "Disease: {}", patient.disease())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_core::{PatientFields, PatientRepo, PatientStore};

    #[test]
    fn renders_every_field_on_its_own_line() {
        let mut store = PatientStore::new();
        let patient = store
            .add(PatientFields::new("Ada Lovelace", 36, 'F', "12 St James's Sq", "Cancer"))
            .unwrap();

        let mut out = Vec::new();
        write_patient(&mut out, patient).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Patient ID: 1\n\
             Name: Ada Lovelace\n\
             Age: 36\n\
             Gender: F\n\
             Address: 12 St James's Sq\n\
             Disease: Cancer\n"
        );
    }
}
