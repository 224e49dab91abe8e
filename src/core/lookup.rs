use crate::domain::model::{Directory, Person};
use crate::utils::error::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

pub const PROMPT: &str = "Enter the ID of the person you want to display (enter <= 0 to exit): ";
pub const NOT_FOUND_MESSAGE: &str = "No user found with that ID";
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a whole number";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    Found { id: i64, person: &'a Person },
    NotFound,
}

impl fmt::Display for LookupOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found { id, person } => write!(
                f,
                "Person #{} is {} with a birthday of {}",
                id,
                person.name,
                person.birthday.format("%Y-%m-%d")
            ),
            LookupOutcome::NotFound => f.write_str(NOT_FOUND_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Lookup(i64),
    /// Any id <= 0.
    Exit,
    /// Positive but beyond `i64`, so no row can carry it.
    OutOfRange,
    Invalid(String),
}

impl Query {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(id) if id <= 0 => Query::Exit,
            Ok(id) => Query::Lookup(id),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Query::OutOfRange,
                IntErrorKind::NegOverflow => Query::Exit,
                _ => Query::Invalid(input.to_string()),
            },
        }
    }
}

/// Answers id queries against a [`Directory`] until the user asks to stop.
pub struct LookupSession<'a> {
    directory: &'a Directory,
}

impl<'a> LookupSession<'a> {
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    pub fn respond(&self, id: i64) -> LookupOutcome<'a> {
        match self.directory.get(id) {
            Some(person) => LookupOutcome::Found { id, person },
            None => LookupOutcome::NotFound,
        }
    }

    /// Runs the prompt loop and returns how many lookups were answered.
    ///
    /// Stops on an id <= 0 or at end of input, writing nothing further in
    /// either case. Input that is not an integer is answered with a hint and
    /// the prompt is shown again.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<usize> {
        let mut answered = 0;
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed, leaving lookup loop");
                break;
            }

            match Query::parse(&line) {
                Query::Exit => break,
                Query::Lookup(id) => {
                    let outcome = self.respond(id);
                    tracing::debug!("Lookup #{} -> {:?}", id, outcome);
                    match &outcome {
                        LookupOutcome::Found { .. } => writeln!(output, "{}\n", outcome)?,
                        LookupOutcome::NotFound => writeln!(output, "{}", outcome)?,
                    }
                    answered += 1;
                }
                Query::OutOfRange => {
                    writeln!(output, "{}", LookupOutcome::NotFound)?;
                    answered += 1;
                }
                Query::Invalid(raw) => {
                    tracing::debug!("Rejected non-numeric input {:?}", raw);
                    writeln!(output, "{}", INVALID_INPUT_MESSAGE)?;
                }
            }
        }

        output.flush()?;
        Ok(answered)
    }
}
