//! Request construction.
//!
//! Every function here is a pure mapping from already-parsed command-line values to the exact
//! protobuf message a remote procedure expects. Nothing is validated beyond argument shape:
//! identifiers are carried through untouched and names are sent as given.

use crate::pb;
use crate::ResultEntryError;
use std::str::FromStr;

/// One `name:value` pair from the trailing arguments of `technician_add_results`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    name: String,
    value: String,
}

impl ResultEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for ResultEntry {
    type Err = ResultEntryError;

    /// Splits on the single `:` in `token`. Either side may be empty.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, value) = token
            .split_once(':')
            .ok_or_else(|| ResultEntryError::MissingSeparator(token.to_string()))?;
        if value.contains(':') {
            return Err(ResultEntryError::ExtraSeparator(token.to_string()));
        }
        Ok(Self::new(name, value))
    }
}

pub fn empty() -> pb::Empty {
    pb::Empty {}
}

pub fn id(id: i64) -> pb::Id {
    pb::Id { id }
}

/// Only the text `true`, in any letter case, selects even identifiers.
pub fn is_even(text: &str) -> bool {
    text.to_lowercase() == "true"
}

pub fn id_parity_filter(text: &str) -> pb::FilterEvenId {
    pb::FilterEvenId {
        is_even: is_even(text),
    }
}

/// A person to be registered. The id is left at zero for the server to assign.
pub fn new_person(name: impl Into<String>) -> pb::Person {
    pb::Person {
        id: 0,
        name: name.into(),
    }
}

/// Builds a test submission. Entries are applied in order, so a repeated name keeps its last
/// value.
pub fn new_med_test(
    technician: i64,
    doctor: i64,
    patient: i64,
    entries: impl IntoIterator<Item = ResultEntry>,
) -> pb::NewMedTestRequest {
    let mut request = pb::NewMedTestRequest {
        technician,
        doctor,
        patient,
        ..Default::default()
    };
    for entry in entries {
        request.results.insert(entry.name, entry.value);
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entries(tokens: &[&str]) -> Vec<ResultEntry> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_result_entry_splits_on_colon() {
        let entry: ResultEntry = "glucose:90".parse().unwrap();
        assert_eq!(entry.name(), "glucose");
        assert_eq!(entry.value(), "90");
    }

    #[test]
    fn test_result_entry_allows_empty_sides() {
        assert_eq!(":5".parse::<ResultEntry>().unwrap(), ResultEntry::new("", "5"));
        assert_eq!("hb:".parse::<ResultEntry>().unwrap(), ResultEntry::new("hb", ""));
    }

    #[test]
    fn test_result_entry_rejects_missing_separator() {
        assert_eq!(
            "badtoken".parse::<ResultEntry>(),
            Err(ResultEntryError::MissingSeparator("badtoken".into()))
        );
    }

    #[test]
    fn test_result_entry_rejects_extra_separator() {
        assert_eq!(
            "time:12:30".parse::<ResultEntry>(),
            Err(ResultEntryError::ExtraSeparator("time:12:30".into()))
        );
    }

    #[test]
    fn test_is_even_accepts_true_in_any_case() {
        for text in ["TRUE", "true", "True", "tRuE"] {
            assert!(is_even(text), "{text}");
            assert!(id_parity_filter(text).is_even, "{text}");
        }
    }

    #[test]
    fn test_is_even_rejects_everything_else() {
        for text in ["false", "yes", "1", "", " true", "truee"] {
            assert!(!is_even(text), "{text:?}");
            assert!(!id_parity_filter(text).is_even, "{text:?}");
        }
    }

    #[test]
    fn test_new_med_test_populates_every_field() {
        let request = new_med_test(11, 12, 13, entries(&["glucose:90", "chol:150"]));

        assert_eq!(request.technician, 11);
        assert_eq!(request.doctor, 12);
        assert_eq!(request.patient, 13);
        assert_eq!(
            request.results,
            BTreeMap::from([
                ("glucose".to_string(), "90".to_string()),
                ("chol".to_string(), "150".to_string()),
            ])
        );
    }

    #[test]
    fn test_new_med_test_last_duplicate_wins() {
        let request = new_med_test(1, 2, 3, entries(&["glucose:90", "glucose:95"]));

        assert_eq!(request.results.len(), 1);
        assert_eq!(request.results["glucose"], "95");
    }

    #[test]
    fn test_new_med_test_without_entries() {
        let request = new_med_test(1, 2, 3, Vec::new());
        assert!(request.results.is_empty());
    }

    #[test]
    fn test_new_person_leaves_id_unassigned() {
        let person = new_person("Ada Lovelace");
        assert_eq!(person.id, 0);
        assert_eq!(person.name, "Ada Lovelace");
    }

    #[test]
    fn test_id_wraps_value() {
        assert_eq!(id(-4), pb::Id { id: -4 });
    }
}
