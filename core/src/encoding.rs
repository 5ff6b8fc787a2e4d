//! JSON text in the layout of the reference encoder the function's clients
//! were written against: `", "` and `": "` separators, ASCII-only output and
//! shortest-repr floats with a signed two-digit exponent.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::errors::{Result, SerializationError};

#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (offset, ch) in fragment.char_indices() {
            if is_plain_ascii(ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..offset])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = offset + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }
}

fn is_plain_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Shortest round-trip text for a finite `value`: positional between 1e-4
/// and 1e16, scientific outside, always with a fraction or an exponent.
pub fn float_repr(value: f64) -> String {
    // `{:e}` yields the shortest round-trip digits as `d[.ddd]e[-]x`
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if (-4..16).contains(&exponent) {
        let point = exponent + 1;
        let text = if point <= 0 {
            format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
        } else {
            let point = point as usize;
            if digits.len() > point {
                format!("{}.{}", &digits[..point], &digits[point..])
            } else {
                format!("{digits}{}.0", "0".repeat(point - digits.len()))
            }
        };
        format!("{sign}{text}")
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.unsigned_abs())
    }
}

/// Serializes `value` with [`SpacedAsciiFormatter`].
pub fn to_spaced_ascii_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut serializer =
        Serializer::with_formatter(Vec::with_capacity(128), SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(serializer.into_inner()).map_err(|e| {
        SerializationError::Utf8 {
            reason: e.to_string(),
        }
        .into()
    })
}
