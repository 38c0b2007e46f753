//! Plain-text rendering of returned records.
//!
//! Layouts are fixed; callers depend on them byte for byte. Unset nested messages render with
//! protobuf defaults (id `0`, empty name).

use crate::pb;
use std::io::{self, Write};

/// A record that wraps a single [`pb::Person`].
pub trait PersonRecord {
    fn person(&self) -> Option<&pb::Person>;
}

impl PersonRecord for pb::Patient {
    fn person(&self) -> Option<&pb::Person> {
        self.person.as_ref()
    }
}

impl PersonRecord for pb::Doctor {
    fn person(&self) -> Option<&pb::Person> {
        self.person.as_ref()
    }
}

impl PersonRecord for pb::Technician {
    fn person(&self) -> Option<&pb::Person> {
        self.person.as_ref()
    }
}

fn person_id<R: PersonRecord>(record: Option<&R>) -> i64 {
    record.and_then(|r| r.person()).map_or(0, |p| p.id)
}

/// Writes a test record followed by one blank line.
///
/// ```text
/// Test: 7
/// Patient: 1
/// Doctor: 2
/// Technician: 3
/// \ta: 1
/// ```
pub fn write_med_test<W: Write>(out: &mut W, result: &pb::MedTestResult) -> io::Result<()> {
    writeln!(out, "Test: {}", result.id)?;
    writeln!(out, "Patient: {}", person_id(result.patient.as_ref()))?;
    writeln!(out, "Doctor: {}", person_id(result.doctor.as_ref()))?;
    writeln!(out, "Technician: {}", person_id(result.technician.as_ref()))?;
    for (name, value) in &result.results {
        writeln!(out, "\t{name}: {value}")?;
    }
    writeln!(out)
}

/// Writes `ID: {id}` and `Name:{name}` followed by two blank lines.
pub fn write_person<W: Write>(out: &mut W, person: Option<&pb::Person>) -> io::Result<()> {
    let (id, name) = person.map_or((0, ""), |p| (p.id, p.name.as_str()));
    write!(out, "ID: {id}\nName:{name}\n\n\n")
}

pub fn write_person_record<W: Write, R: PersonRecord>(out: &mut W, record: &R) -> io::Result<()> {
    write_person(out, record.person())
}

pub fn write_status<W: Write>(out: &mut W, response: &pb::StatusResponse) -> io::Result<()> {
    writeln!(out, "{}", response.status)
}
