use crate::domain::model::{Directory, Person, RowError, RowErrorKind};
use crate::domain::ports::ErrorSink;
use crate::utils::error::Result;
use chrono::NaiveDate;
use csv::StringRecord;

pub const BIRTHDAY_FORMAT: &str = "%d/%m/%Y";

/// Builds a [`Directory`] from a raw `id,name,DD/MM/YYYY` payload.
///
/// The whole payload must be UTF-8, otherwise nothing is parsed. After that no
/// single row can fail the parse: malformed rows go to `sink` and are skipped.
/// When an id repeats, the last row wins.
pub fn parse_directory<S: ErrorSink + ?Sized>(payload: &[u8], sink: &mut S) -> Result<Directory> {
    let text = std::str::from_utf8(payload)?;

    // Plain comma splitting: quotes are ordinary characters here.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut directory = Directory::default();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = match result {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                parse_row(&record).map_err(|kind| RowError {
                    line,
                    id: record.get(0).unwrap_or_default().to_string(),
                    kind,
                })
            }
            Err(e) => Err(RowError {
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                id: String::new(),
                kind: RowErrorKind::Unreadable(e.to_string()),
            }),
        };

        match row {
            Ok((id, person)) => {
                if let Some(previous) = directory.insert(id, person) {
                    tracing::debug!("ID #{} redefined, replacing {}", id, previous.name);
                }
            }
            Err(error) => {
                skipped += 1;
                sink.report(&error);
            }
        }
    }

    tracing::info!(
        "Parsed {} people ({} rows skipped)",
        directory.len(),
        skipped
    );
    Ok(directory)
}

fn parse_row(record: &StringRecord) -> std::result::Result<(i64, Person), RowErrorKind> {
    if record.len() != 3 {
        return Err(RowErrorKind::FieldCount {
            found: record.len(),
        });
    }

    let id = record[0]
        .trim()
        .parse::<i64>()
        .map_err(|e| RowErrorKind::InvalidId(format!("{:?}: {}", &record[0], e)))?;

    let birthday = parse_birthday(&record[2])
        .map_err(|detail| RowErrorKind::InvalidDate(format!("{:?}: {}", &record[2], detail)))?;

    Ok((id, Person::new(&record[1], birthday)))
}

/// Day and month take 1-2 digits, the year exactly 4; no signs or padding.
fn parse_birthday(field: &str) -> std::result::Result<NaiveDate, String> {
    let parts: Vec<&str> = field.split('/').collect();
    let well_formed = match parts.as_slice() {
        [day, month, year] => {
            is_digits(day, 1..=2) && is_digits(month, 1..=2) && is_digits(year, 4..=4)
        }
        _ => false,
    };
    if !well_formed {
        return Err("expected day/month/four-digit year".to_string());
    }

    NaiveDate::parse_from_str(field, BIRTHDAY_FORMAT).map_err(|e| e.to_string())
}

fn is_digits(part: &str, width: std::ops::RangeInclusive<usize>) -> bool {
    width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
