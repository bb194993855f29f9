//! OR-Library instance reader.
//!
//! Parses the Falkenauer/OR-Library `binpack` text format: a leading
//! problem count, then per problem an identifier line, a
//! `capacity n_items best_known` header, and `n_items` weights. A file
//! may hold many problems; one run solves one, so the first is read.

use super::instance::{Instance, InstanceError};
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};
use thiserror::Error;
use tracing::info;

/// Failure to load an instance file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read instance file: {0}")]
    Io(#[from] io::Error),

    #[error("instance file is truncated: expected {0}")]
    UnexpectedEnd(&'static str),

    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },

    #[error("instance file contains no problems")]
    Empty,

    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Reads the first problem of an OR-Library `binpack` file.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<Instance, ReadError> {
    parse_instance(&fs::read_to_string(path)?)
}

/// Parses OR-Library `binpack` text. See the module docs for the format.
pub fn parse_instance(text: &str) -> Result<Instance, ReadError> {
    let mut tokens = text.split_whitespace();

    let problem_count: usize = parse_token(&mut tokens, "problem count")?;
    if problem_count == 0 {
        return Err(ReadError::Empty);
    }

    let identifier = next_token(&mut tokens, "problem identifier")?;
    let capacity: f64 = parse_token(&mut tokens, "box capacity")?;
    let num_objects: usize = parse_token(&mut tokens, "object count")?;
    let best_known: usize = parse_token(&mut tokens, "best known box count")?;

    let mut weights = Vec::with_capacity(num_objects);
    for _ in 0..num_objects {
        weights.push(parse_token(&mut tokens, "object weight")?);
    }

    info!(
        identifier,
        objects = num_objects,
        capacity,
        best_known,
        "instance loaded"
    );

    Ok(Instance::new(weights, capacity)?)
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<&'a str, ReadError> {
    tokens.next().ok_or(ReadError::UnexpectedEnd(expected))
}

fn parse_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<T, ReadError> {
    let token = next_token(tokens, what)?;
    token.parse().map_err(|_| ReadError::InvalidToken {
        what,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
 1
 u120_00
 150 4 2
 42
 69
 30
 99
";

    #[test]
    fn test_parse_sample() {
        let instance = parse_instance(SAMPLE).expect("parses");
        assert_eq!(instance.num_objects(), 4);
        assert!((instance.capacity() - 150.0).abs() < 1e-12);
        assert!((instance.weight(0) - 42.0).abs() < 1e-12);
        assert!((instance.weight(3) - 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_reads_first_of_many_problems() {
        let text = "\
 2
 t60_00
 100 2 1
 40
 50
 t60_01
 100 3 2
 60
 60
 60
";
        let instance = parse_instance(text).expect("parses");
        assert_eq!(instance.num_objects(), 2);
        assert!((instance.weight(1) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_truncated_file() {
        let err = parse_instance(" 1\n u120_00\n 150 4 2\n 42\n 69\n").unwrap_err();
        assert!(matches!(err, ReadError::UnexpectedEnd("object weight")));
    }

    #[test]
    fn test_invalid_count() {
        let err = parse_instance("abc").unwrap_err();
        assert!(matches!(
            err,
            ReadError::InvalidToken {
                what: "problem count",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_problem_list() {
        assert!(matches!(parse_instance(" 0\n"), Err(ReadError::Empty)));
    }

    #[test]
    fn test_overweight_object_is_fatal() {
        let err = parse_instance(" 1\n bad_00\n 10 1 1\n 11\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::Instance(InstanceError::ObjectTooHeavy { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_instance("/no/such/instance.txt"),
            Err(ReadError::Io(_))
        ));
    }
}
