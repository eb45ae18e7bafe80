//! Raw cell value to SQL literal encoding

use std::borrow::Cow;

use crate::model::RawValue;

/// Encode one raw value as an SQL literal
pub fn encode(value: &RawValue) -> Cow<'static, str> {
    match value {
        // Must come first: the natural text form of a Quad is not an integer.
        RawValue::Quad(q) => Cow::Owned(q.to_i64().to_string()),
        RawValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        RawValue::I8(v) => Cow::Owned(v.to_string()),
        RawValue::U8(v) => Cow::Owned(v.to_string()),
        RawValue::I16(v) => Cow::Owned(v.to_string()),
        RawValue::U16(v) => Cow::Owned(v.to_string()),
        RawValue::I32(v) => Cow::Owned(v.to_string()),
        RawValue::U32(v) => Cow::Owned(v.to_string()),
        RawValue::I64(v) => Cow::Owned(v.to_string()),
        RawValue::U64(v) => Cow::Owned(v.to_string()),
        RawValue::F32(v) => float_literal(f64::from(*v), v.to_string()),
        RawValue::F64(v) => float_literal(*v, v.to_string()),
        RawValue::Null => Cow::Borrowed("NULL"),
        RawValue::Text(s) => text_literal(s),
    }
}

/// Quote a string, `NULL` when empty; `\` and `'` are backslash-escaped
pub fn text_literal(s: &str) -> Cow<'static, str> {
    if s.is_empty() {
        return Cow::Borrowed("NULL");
    }
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    Cow::Owned(format!("'{escaped}'"))
}

fn float_literal(v: f64, natural: String) -> Cow<'static, str> {
    if v.is_nan() {
        Cow::Borrowed("'NaN'")
    } else if v == f64::INFINITY {
        Cow::Borrowed("'Infinity'")
    } else if v == f64::NEG_INFINITY {
        Cow::Borrowed("'-Infinity'")
    } else {
        Cow::Owned(natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quad;

    /// Reads a backslash-escaped string literal; `None` unless it is exactly one literal
    fn read_literal(literal: &str) -> Option<String> {
        let mut chars = literal.chars();
        if chars.next()? != '\'' {
            return None;
        }
        let mut out = String::new();
        while let Some(c) = chars.next() {
            match c {
                '\\' => out.push(chars.next()?),
                '\'' => return chars.next().is_none().then_some(out),
                other => out.push(other),
            }
        }
        None
    }

    #[test]
    fn test_quad_is_bare_integer() {
        let value = RawValue::Quad(Quad::from(123456789012));
        assert_eq!(encode(&value), "123456789012");
    }

    #[test]
    fn test_numbers_are_unquoted() {
        assert_eq!(encode(&RawValue::U8(255)), "255");
        assert_eq!(encode(&RawValue::I8(-3)), "-3");
        assert_eq!(encode(&RawValue::U32(4_000_000_000)), "4000000000");
        assert_eq!(encode(&RawValue::I64(-9)), "-9");
        assert_eq!(encode(&RawValue::F32(1.5)), "1.5");
        assert_eq!(encode(&RawValue::F64(-0.25)), "-0.25");
        assert_eq!(encode(&RawValue::Bool(true)), "true");
        assert_eq!(encode(&RawValue::Bool(false)), "false");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(encode(&RawValue::F32(f32::NAN)), "'NaN'");
        assert_eq!(encode(&RawValue::F64(f64::INFINITY)), "'Infinity'");
        assert_eq!(encode(&RawValue::F64(f64::NEG_INFINITY)), "'-Infinity'");
    }

    #[test]
    fn test_empty_and_null_text() {
        assert_eq!(encode(&RawValue::Text(String::new())), "NULL");
        assert_eq!(encode(&RawValue::Null), "NULL");
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(encode(&RawValue::from("O'Brien")), "'O\\'Brien'");
        assert_eq!(encode(&RawValue::from("plain")), "'plain'");
    }

    #[test]
    fn test_escaped_text_reads_back() {
        for s in ["O'Brien", "''", "it's a 'test'", "no quotes", "'"] {
            let literal = encode(&RawValue::from(s));
            assert_eq!(read_literal(&literal).as_deref(), Some(s), "{literal}");
        }
    }

    #[test]
    fn test_backslashes_are_escaped() {
        assert_eq!(encode(&RawValue::from("a\\")), "'a\\\\'");
        assert_eq!(encode(&RawValue::from("C:\\'x")), "'C:\\\\\\'x'");

        for s in ["a\\", "C:\\'x", "path\\name", "\\", "\\\\'"] {
            let literal = encode(&RawValue::from(s));
            assert_eq!(read_literal(&literal).as_deref(), Some(s), "{literal}");
        }
    }
}
