use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use crate::errors::EventError;

/// Running total of a `numbers` sequence.
///
/// Integers stay exact until a float joins the sum or the 128-bit
/// accumulator overflows, after which the total is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Total {
    Int(i128),
    Float(f64),
}

impl Default for Total {
    fn default() -> Self {
        Total::Int(0)
    }
}

impl Total {
    fn accumulate(self, term: Term) -> Total {
        match (self, term) {
            (Total::Int(acc), Term::Int(n)) => match acc.checked_add(n) {
                Some(sum) => Total::Int(sum),
                None => Total::Float(acc as f64 + n as f64),
            },
            (Total::Int(acc), Term::Float(x)) => Total::Float(acc as f64 + x),
            (Total::Float(acc), Term::Int(n)) => Total::Float(acc + n as f64),
            (Total::Float(acc), Term::Float(x)) => Total::Float(acc + x),
        }
    }
}

impl Serialize for Total {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Total::Int(n) => match (i64::try_from(n), u64::try_from(n)) {
                (Ok(small), _) => serializer.serialize_i64(small),
                (_, Ok(unsigned)) => serializer.serialize_u64(unsigned),
                _ => serializer.serialize_i128(n),
            },
            Total::Float(x) => serializer.serialize_f64(x),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Term {
    Int(i128),
    Float(f64),
}

fn term_of(value: &Value) -> Option<Term> {
    match value {
        Value::Number(n) => Some(number_term(n)),
        Value::Bool(b) => Some(Term::Int(i128::from(*b))),
        _ => None,
    }
}

fn number_term(n: &Number) -> Term {
    if let Some(i) = n.as_i64() {
        Term::Int(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Term::Int(i128::from(u))
    } else {
        // serde_json numbers are always one of i64, u64 or f64
        Term::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Whether `value` takes part in arithmetic. Booleans count as 0 and 1.
pub fn is_numeric(value: &Value) -> bool {
    term_of(value).is_some()
}

/// Sums `numbers` left to right, starting from integer zero.
///
/// Stops at the first element that is not numeric.
pub fn sum_numbers(numbers: &[Value]) -> Result<Total, EventError> {
    numbers
        .iter()
        .enumerate()
        .try_fold(Total::default(), |total, (index, value)| {
            term_of(value)
                .map(|term| total.accumulate(term))
                .ok_or_else(|| EventError::NonNumericElement {
                    index,
                    found: value.to_string(),
                })
        })
}
