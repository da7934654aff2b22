use std::cmp::Ordering;
use std::fmt;

/// Loosely typed input, numeric or not.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Integer(i64),
    Real(f64),
    Text(String),
    List(Vec<Operand>)
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "an integer",
            Operand::Real(_) => "a real number",
            Operand::Text(_) => "a text",
            Operand::List(_) => "a list"
        }
    }
}

impl From<&str> for Operand {
    /// Tries integer, then finite real, then a flat `[a, b, ...]` list. Anything else is text.
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(integer) = trimmed.parse::<i64>() {
            return Operand::Integer(integer);
        }
        if let Ok(real) = trimmed.parse::<f64>() {
            if real.is_finite() {
                return Operand::Real(real);
            }
        }
        if let Some(inner) = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            if inner.trim().is_empty() {
                return Operand::List(Vec::new());
            }
            return Operand::List(inner.split(',').map(Operand::from).collect());
        }
        Operand::Text(raw.to_string())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(integer) => write!(f, "{}", integer),
            Operand::Real(real) => write!(f, "{}", Number::Real(*real)),
            Operand::Text(text) => write!(f, "'{}'", text),
            Operand::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64)
}

impl Number {
    fn as_real(self) -> f64 {
        match self {
            Number::Integer(integer) => integer as f64,
            Number::Real(real) => real
        }
    }

    pub(super) fn is_zero(self) -> bool {
        self.as_real() == 0.0
    }

    pub(super) fn is_positive(self) -> bool {
        self.as_real() > 0.0
    }

    /// Whole part, dropping any fraction. Negative values give zero.
    pub(super) fn truncated_count(self) -> usize {
        match self {
            Number::Integer(integer) => usize::try_from(integer).unwrap_or(0),
            Number::Real(real) => real.trunc() as usize
        }
    }

    pub(super) fn minus(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_sub(b) {
                Some(difference) => Number::Integer(difference),
                None => Number::Real(a as f64 - b as f64)
            },
            (a, b) => Number::Real(a.as_real() - b.as_real())
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.partial_cmp(b),
            (a, b) => a.as_real().partial_cmp(&b.as_real())
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(integer) => write!(f, "{}", integer),
            Number::Real(real) if real.fract() == 0.0 && real.abs() < 1e16 => write!(f, "{:.1}", real),
            Number::Real(real) => write!(f, "{}", real)
        }
    }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[test]
fn test_operand_from_text() {
    assert_eq!(Operand::from("5"), Operand::Integer(5));
    assert_eq!(Operand::from(" -7 "), Operand::Integer(-7));
    assert_eq!(Operand::from("2.5"), Operand::Real(2.5));
    assert_eq!(Operand::from("abc"), Operand::Text("abc".to_string()));
    assert_eq!(Operand::from("inf"), Operand::Text("inf".to_string()));
    assert_eq!(Operand::from("NaN"), Operand::Text("NaN".to_string()));
    assert_eq!(Operand::from("[1, 2]"), Operand::List(vec![Operand::Integer(1), Operand::Integer(2)]));
    assert_eq!(Operand::from("[]"), Operand::List(Vec::new()));
}

#[test]
fn test_operand_display() {
    assert_eq!(Operand::from("[1, 2]").to_string(), "[1, 2]");
    assert_eq!(Operand::from("abc").to_string(), "'abc'");
    assert_eq!(Operand::Real(3.0).to_string(), "3.0");
}

#[test]
fn test_number_display() {
    assert_eq!(Number::Integer(-2).to_string(), "-2");
    assert_eq!(Number::Real(2.0).to_string(), "2.0");
    assert_eq!(Number::Real(-2.5).to_string(), "-2.5");
}

#[test]
fn test_number_arithmetic() {
    assert_eq!(Number::Integer(-5).minus(Number::Integer(-3)), Number::Integer(-2));
    assert_eq!(Number::Integer(-5).minus(Number::Real(-3.5)), Number::Real(-1.5));
    assert_eq!(Number::Integer(i64::MIN).minus(Number::Integer(1)), Number::Real(i64::MIN as f64 - 1.0));
    assert!(Number::Integer(3) < Number::Real(3.5));
    assert!(Number::Real(0.0).is_zero());
    assert_eq!(Number::Real(3.9).truncated_count(), 3);
    assert_eq!(Number::Integer(4).truncated_count(), 4);
}
