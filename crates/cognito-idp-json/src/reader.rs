//! Pull-style JSON reader.
//!
//! [`JsonReader`] walks a parsed [`serde_json::Value`] with the same
//! begin/next/end vocabulary as [`JsonWriter`](crate::JsonWriter), so an
//! unmarshaller reads members one at a time, in whatever order the service
//! sent them, and can skip members it does not know about.

use std::fmt;
use std::iter::Peekable;

use base64::Engine;
use bytes::Bytes;
use serde_json::Value;

use crate::error::{JsonError, type_name};

enum Frame {
    Object(Peekable<serde_json::map::IntoIter>),
    Array(Peekable<std::vec::IntoIter<Value>>),
}

/// Cursor over a JSON document.
///
/// The reader holds at most one *pending* value: the document root before
/// anything is read, the value belonging to the member name most recently
/// returned by [`JsonReader::next_name`], or the next element of the array
/// being read. Every `read_*`, `begin_*` and [`JsonReader::skip_value`] call
/// consumes the pending value.
///
/// # Examples
///
/// ```
/// use cognito_idp_json::JsonReader;
///
/// let mut reader = JsonReader::from_slice(br#"{"Priority": 2}"#).unwrap();
/// reader.begin_object().unwrap();
/// assert!(reader.has_next().unwrap());
/// assert_eq!(reader.next_name().unwrap(), "Priority");
/// assert_eq!(reader.read_i32().unwrap(), 2);
/// reader.end_object().unwrap();
/// ```
pub struct JsonReader {
    frames: Vec<Frame>,
    pending: Option<Value>,
}

impl fmt::Debug for JsonReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonReader")
            .field("depth", &self.frames.len())
            .field("pending", &self.pending.as_ref().map(type_name))
            .finish()
    }
}

impl JsonReader {
    /// Create a reader positioned on `value`.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            frames: Vec::new(),
            pending: Some(value),
        }
    }

    /// Parse `input` and position a reader on the document root.
    pub fn from_slice(input: &[u8]) -> Result<Self, JsonError> {
        let value: Value = serde_json::from_slice(input)?;
        Ok(Self::new(value))
    }

    /// Check that the whole document has been consumed.
    pub fn finish(self) -> Result<(), JsonError> {
        if !self.frames.is_empty() {
            return Err(JsonError::InvalidState("document has unclosed containers"));
        }
        if self.pending.is_some() {
            return Err(JsonError::InvalidState("document root was never read"));
        }
        Ok(())
    }

    /// Enter the pending object.
    pub fn begin_object(&mut self) -> Result<(), JsonError> {
        match self.take_value()? {
            Value::Object(map) => {
                self.frames.push(Frame::Object(map.into_iter().peekable()));
                Ok(())
            }
            other => Err(JsonError::unexpected("object", &other)),
        }
    }

    /// Leave the current object. Every member must have been consumed.
    pub fn end_object(&mut self) -> Result<(), JsonError> {
        if self.pending.is_some() {
            return Err(JsonError::InvalidState("member value was not consumed"));
        }
        match self.frames.pop() {
            Some(Frame::Object(mut rest)) => {
                if rest.peek().is_some() {
                    return Err(JsonError::InvalidState("object closed with unread members"));
                }
                Ok(())
            }
            Some(Frame::Array(_)) | None => {
                Err(JsonError::InvalidState("end_object outside of an object"))
            }
        }
    }

    /// Enter the pending array.
    pub fn begin_array(&mut self) -> Result<(), JsonError> {
        match self.take_value()? {
            Value::Array(items) => {
                self.frames.push(Frame::Array(items.into_iter().peekable()));
                Ok(())
            }
            other => Err(JsonError::unexpected("array", &other)),
        }
    }

    /// Leave the current array. Every element must have been consumed.
    pub fn end_array(&mut self) -> Result<(), JsonError> {
        if self.pending.is_some() {
            return Err(JsonError::InvalidState("array element was not consumed"));
        }
        match self.frames.pop() {
            Some(Frame::Array(mut rest)) => {
                if rest.peek().is_some() {
                    return Err(JsonError::InvalidState("array closed with unread elements"));
                }
                Ok(())
            }
            Some(Frame::Object(_)) | None => {
                Err(JsonError::InvalidState("end_array outside of an array"))
            }
        }
    }

    /// Whether the current object or array has more members/elements.
    pub fn has_next(&mut self) -> Result<bool, JsonError> {
        if self.pending.is_some() {
            return Err(JsonError::InvalidState("previous value was not consumed"));
        }
        match self.frames.last_mut() {
            Some(Frame::Object(members)) => Ok(members.peek().is_some()),
            Some(Frame::Array(items)) => Ok(items.peek().is_some()),
            None => Err(JsonError::InvalidState("has_next outside of a container")),
        }
    }

    /// Read the next member name of the current object; its value becomes
    /// pending.
    pub fn next_name(&mut self) -> Result<String, JsonError> {
        if self.pending.is_some() {
            return Err(JsonError::InvalidState("previous value was not consumed"));
        }
        match self.frames.last_mut() {
            Some(Frame::Object(members)) => match members.next() {
                Some((name, value)) => {
                    self.pending = Some(value);
                    Ok(name)
                }
                None => Err(JsonError::InvalidState("no more members in object")),
            },
            Some(Frame::Array(_)) | None => {
                Err(JsonError::InvalidState("member name outside of an object"))
            }
        }
    }

    /// Whether the pending value is `null`. Does not consume it.
    pub fn peek_null(&mut self) -> Result<bool, JsonError> {
        let value = self.take_value()?;
        let is_null = value.is_null();
        self.pending = Some(value);
        Ok(is_null)
    }

    /// Discard the pending value, including any nested content.
    pub fn skip_value(&mut self) -> Result<(), JsonError> {
        self.take_value().map(drop)
    }

    /// Discard the value of a member the caller does not recognise.
    pub fn skip_member(&mut self, name: &str) -> Result<(), JsonError> {
        tracing::trace!(member = name, "skipping unknown member");
        self.skip_value()
    }

    /// Read a string.
    pub fn read_string(&mut self) -> Result<String, JsonError> {
        match self.take_value()? {
            Value::String(s) => Ok(s),
            other => Err(JsonError::unexpected("string", &other)),
        }
    }

    /// Read a boolean.
    pub fn read_bool(&mut self) -> Result<bool, JsonError> {
        match self.take_value()? {
            Value::Bool(b) => Ok(b),
            other => Err(JsonError::unexpected("boolean", &other)),
        }
    }

    /// Read a 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32, JsonError> {
        let value = self.read_i64()?;
        i32::try_from(value)
            .map_err(|_| JsonError::InvalidValue(format!("{value} is out of range for i32")))
    }

    /// Read a 64-bit integer.
    pub fn read_i64(&mut self) -> Result<i64, JsonError> {
        match self.take_value()? {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| JsonError::InvalidValue(format!("{n} is not a 64-bit integer"))),
            other => Err(JsonError::unexpected("number", &other)),
        }
    }

    /// Read a double. The strings `NaN`, `Infinity` and `-Infinity` are
    /// accepted for the non-finite values.
    pub fn read_f64(&mut self) -> Result<f64, JsonError> {
        match self.take_value()? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| JsonError::InvalidValue(format!("{n} is not a double"))),
            Value::String(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(JsonError::InvalidValue(format!("'{s}' is not a double"))),
            },
            other => Err(JsonError::unexpected("number", &other)),
        }
    }

    /// Read a base64-encoded blob.
    pub fn read_blob(&mut self) -> Result<Bytes, JsonError> {
        let encoded = self.read_string()?;
        let decoded = base64::engine::general_purpose::STANDARD.decode(encoded.as_bytes())?;
        Ok(Bytes::from(decoded))
    }

    /// Read a timestamp.
    ///
    /// Epoch seconds (integer or fractional, as a number or numeric string)
    /// are the wire format; RFC 3339 strings are accepted as well.
    pub fn read_timestamp(&mut self) -> Result<chrono::DateTime<chrono::Utc>, JsonError> {
        match self.take_value()? {
            Value::Number(n) => {
                let text = n.to_string();
                match decimal_epoch_seconds(&text) {
                    Some(ts) => Ok(ts),
                    None => n
                        .as_f64()
                        .ok_or_else(|| JsonError::InvalidValue(format!("{n} is not a timestamp")))
                        .and_then(epoch_seconds),
                }
            }
            Value::String(s) => {
                if let Some(ts) = decimal_epoch_seconds(&s) {
                    return Ok(ts);
                }
                match s.parse::<f64>() {
                    Ok(secs) => epoch_seconds(secs),
                    Err(_) => chrono::DateTime::parse_from_rfc3339(&s)
                        .map(|dt| dt.with_timezone(&chrono::Utc))
                        .map_err(|e| {
                            JsonError::InvalidValue(format!("invalid timestamp '{s}': {e}"))
                        }),
                }
            }
            other => Err(JsonError::unexpected("timestamp", &other)),
        }
    }

    fn take_value(&mut self) -> Result<Value, JsonError> {
        if let Some(value) = self.pending.take() {
            return Ok(value);
        }
        match self.frames.last_mut() {
            Some(Frame::Array(items)) => items
                .next()
                .ok_or(JsonError::InvalidState("read past the end of an array")),
            Some(Frame::Object(_)) => Err(JsonError::InvalidState(
                "value read before its member name",
            )),
            None => Err(JsonError::InvalidState("document already consumed")),
        }
    }
}

/// Exact parse of `[-]digits[.digits]` epoch seconds, up to nanosecond
/// precision. Anything else (exponents, longer fractions) returns `None`.
fn decimal_epoch_seconds(text: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty()
        || fraction.len() > 9
        || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let secs: i64 = whole.parse().ok()?;
    let nanos: u32 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<9}").parse().ok()?
    };
    match (negative, nanos) {
        (false, _) => chrono::DateTime::from_timestamp(secs, nanos),
        (true, 0) => chrono::DateTime::from_timestamp(-secs, 0),
        (true, _) => chrono::DateTime::from_timestamp(-secs - 1, 1_000_000_000 - nanos),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn epoch_seconds(secs: f64) -> Result<chrono::DateTime<chrono::Utc>, JsonError> {
    if !secs.is_finite() {
        return Err(JsonError::InvalidValue(format!("{secs} is not a timestamp")));
    }
    let whole = secs.floor();
    let nanos = (((secs - whole) * 1e9).round() as u32).min(999_999_999);
    chrono::DateTime::from_timestamp(whole as i64, nanos)
        .ok_or_else(|| JsonError::InvalidValue(format!("{secs} is out of range for a timestamp")))
}
