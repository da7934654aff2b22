use crate::best_practices::operand::{Number, Operand};

use thiserror::Error;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    First,
    Second
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::First => write!(f, "first"),
            Position::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ComparisonError {
    #[error("Both arguments must be numeric (integer or real), but the {position} one is {kind}")]
    NotNumeric { position: Position, kind: &'static str },

    #[error("The {position} argument is not a finite number")]
    NotFinite { position: Position }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Both positive: the larger number, printed `times` times.
    Repeated { value: Number, times: usize },
    ZeroFound,
    /// Never positive.
    Difference(Number)
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Repeated { value, times } => {
                for i in 0..*times {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
            Outcome::ZeroFound => write!(f, "Zero found"),
            Outcome::Difference(difference) => write!(f, "{}", difference)
        }
    }
}

fn to_number(operand: &Operand, position: Position) -> Result<Number, ComparisonError> {
    match operand {
        Operand::Integer(integer) => Ok(Number::Integer(*integer)),
        Operand::Real(real) if real.is_finite() => Ok(Number::Real(*real)),
        Operand::Real(_) => Err(ComparisonError::NotFinite { position: position }),
        other => Err(ComparisonError::NotNumeric { position: position, kind: other.kind() })
    }
}

pub fn compare_numbers(first: &Operand, second: &Operand) -> Result<Outcome, ComparisonError> {
    let first = to_number(first, Position::First)?;
    let second = to_number(second, Position::Second)?;

    if first.is_zero() || second.is_zero() {
        return Ok(Outcome::ZeroFound);
    }

    if first.is_positive() && second.is_positive() {
        let (larger, smaller) = if first > second { (first, second) } else { (second, first) };
        return Ok(Outcome::Repeated { value: larger, times: smaller.truncated_count() });
    }

    if first < second {
        Ok(Outcome::Difference(first.minus(second)))
    }
    else {
        Ok(Outcome::Difference(second.minus(first)))
    }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[test]
fn test_both_positive() {
    let outcome = compare_numbers(&Operand::Integer(5), &Operand::Integer(3)).unwrap();
    assert_eq!(outcome, Outcome::Repeated { value: Number::Integer(5), times: 3 });
    assert_eq!(outcome.to_string(), "5\n5\n5");

    let outcome = compare_numbers(&Operand::Integer(2), &Operand::Integer(4)).unwrap();
    assert_eq!(outcome, Outcome::Repeated { value: Number::Integer(4), times: 2 });
}

#[test]
fn test_equal_positive_uses_first_as_count() {
    let outcome = compare_numbers(&Operand::Integer(3), &Operand::Real(3.0)).unwrap();
    assert_eq!(outcome, Outcome::Repeated { value: Number::Real(3.0), times: 3 });
    assert_eq!(outcome.to_string(), "3.0\n3.0\n3.0");
}

#[test]
fn test_fractional_count_is_truncated() {
    let outcome = compare_numbers(&Operand::Real(2.9), &Operand::Integer(7)).unwrap();
    assert_eq!(outcome, Outcome::Repeated { value: Number::Integer(7), times: 2 });

    let outcome = compare_numbers(&Operand::Real(0.5), &Operand::Integer(7)).unwrap();
    assert_eq!(outcome, Outcome::Repeated { value: Number::Integer(7), times: 0 });
    assert_eq!(outcome.to_string(), "");
}

#[test]
fn test_zero_found() {
    assert_eq!(compare_numbers(&Operand::Integer(0), &Operand::Integer(10)).unwrap(), Outcome::ZeroFound);
    assert_eq!(compare_numbers(&Operand::Integer(5), &Operand::Integer(0)).unwrap(), Outcome::ZeroFound);
    assert_eq!(compare_numbers(&Operand::Real(-0.0), &Operand::Integer(-4)).unwrap(), Outcome::ZeroFound);
    assert_eq!(Outcome::ZeroFound.to_string(), "Zero found");
}

#[test]
fn test_both_negative() {
    assert_eq!(compare_numbers(&Operand::Integer(-5), &Operand::Integer(-3)).unwrap(), Outcome::Difference(Number::Integer(-2)));
    assert_eq!(compare_numbers(&Operand::Integer(-2), &Operand::Integer(-7)).unwrap(), Outcome::Difference(Number::Integer(-5)));
    assert_eq!(compare_numbers(&Operand::Real(-1.5), &Operand::Integer(-1)).unwrap().to_string(), "-0.5");
}

#[test]
fn test_mixed_signs() {
    assert_eq!(compare_numbers(&Operand::Integer(-5), &Operand::Integer(3)).unwrap(), Outcome::Difference(Number::Integer(-8)));
    assert_eq!(compare_numbers(&Operand::Integer(5), &Operand::Integer(-3)).unwrap(), Outcome::Difference(Number::Integer(-8)));
}

#[test]
fn test_not_numeric() {
    let text = Operand::Text("abc".to_string());
    let list = Operand::List(vec![Operand::Integer(1), Operand::Integer(2)]);

    assert_eq!(compare_numbers(&text, &Operand::Integer(5)), Err(ComparisonError::NotNumeric { position: Position::First, kind: "a text" }));
    assert_eq!(compare_numbers(&list, &Operand::Integer(5)), Err(ComparisonError::NotNumeric { position: Position::First, kind: "a list" }));
    assert_eq!(compare_numbers(&Operand::Integer(5), &list), Err(ComparisonError::NotNumeric { position: Position::Second, kind: "a list" }));
    assert_eq!(compare_numbers(&Operand::Integer(0), &text), Err(ComparisonError::NotNumeric { position: Position::Second, kind: "a text" }));

    let message = compare_numbers(&text, &list).unwrap_err().to_string();
    assert_eq!(message, "Both arguments must be numeric (integer or real), but the first one is a text");
}

#[test]
fn test_not_finite() {
    assert_eq!(compare_numbers(&Operand::Integer(1), &Operand::Real(f64::NAN)), Err(ComparisonError::NotFinite { position: Position::Second }));
    assert_eq!(compare_numbers(&Operand::Real(f64::INFINITY), &Operand::Integer(1)), Err(ComparisonError::NotFinite { position: Position::First }));
}
