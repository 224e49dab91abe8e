use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birthday: NaiveDate,
}

impl Person {
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }
}

/// People keyed by identifier, built once from a CSV payload and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    people: HashMap<i64, Person>,
}

impl Directory {
    /// Later inserts for the same id replace earlier ones.
    pub(crate) fn insert(&mut self, id: i64, person: Person) -> Option<Person> {
        self.people.insert(id, person)
    }

    pub fn get(&self, id: i64) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.people.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &Person)> {
        self.people.iter().map(|(id, person)| (*id, person))
    }
}

impl FromIterator<(i64, Person)> for Directory {
    fn from_iter<T: IntoIterator<Item = (i64, Person)>>(iter: T) -> Self {
        let mut directory = Directory::default();
        for (id, person) in iter {
            directory.insert(id, person);
        }
        directory
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowErrorKind {
    FieldCount { found: usize },
    InvalidId(String),
    InvalidDate(String),
    /// csv reader failure; a UTF-8 slice read with `flexible(true)` does not produce one.
    Unreadable(String),
}

impl fmt::Display for RowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowErrorKind::FieldCount { found } => {
                write!(f, "expected 3 fields (id,name,birthday), found {}", found)
            }
            RowErrorKind::InvalidId(detail) => write!(f, "invalid identifier: {}", detail),
            RowErrorKind::InvalidDate(detail) => {
                write!(f, "birthday does not match DD/MM/YYYY: {}", detail)
            }
            RowErrorKind::Unreadable(detail) => write!(f, "unreadable row: {}", detail),
        }
    }
}

/// A skipped CSV row. `line` is 1-indexed; `id` is the raw first field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub id: String,
    pub kind: RowErrorKind,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error processing line #{}: for ID #{}: {}",
            self.line, self.id, self.kind
        )
    }
}
