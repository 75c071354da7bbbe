//! Streaming JSON writer.
//!
//! [`JsonWriter`] emits a JSON document token by token into any
//! [`std::io::Write`] sink. Punctuation is produced by `serde_json`'s
//! [`CompactFormatter`], so the output has no insignificant whitespace and
//! strings are escaped exactly as `serde_json` escapes them.
//!
//! Wire conventions for the `awsJson1_1` protocol:
//!
//! - Blobs: base64 (standard alphabet, padded) inside a JSON string
//! - Timestamps: epoch seconds as a JSON number, with a fractional part only
//!   when the value has sub-second precision

use std::io::{self, Write};

use base64::Engine;
use serde_json::ser::{CompactFormatter, Formatter};

use crate::error::JsonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Object,
    Array,
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    first: bool,
    /// Object scopes only: a member name has been written and its value is due.
    awaiting_value: bool,
}

/// Token-level JSON writer.
///
/// Every method returns the first I/O error raised by the sink unchanged
/// (wrapped in [`JsonError::Io`]). Calls made out of order, such as a value
/// inside an object without a preceding [`JsonWriter::name`], fail with
/// [`JsonError::InvalidState`].
///
/// # Examples
///
/// ```
/// use cognito_idp_json::JsonWriter;
///
/// let mut writer = JsonWriter::new(Vec::new());
/// writer.begin_object().unwrap();
/// writer.name("Priority").unwrap();
/// writer.integer(1).unwrap();
/// writer.end_object().unwrap();
/// assert_eq!(writer.into_inner(), br#"{"Priority":1}"#);
/// ```
#[derive(Debug)]
pub struct JsonWriter<W> {
    out: W,
    formatter: CompactFormatter,
    scopes: Vec<Scope>,
    root_written: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Create a writer that emits into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            formatter: CompactFormatter,
            scopes: Vec::new(),
            root_written: false,
        }
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Whether a complete top-level value has been written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.root_written && self.scopes.is_empty()
    }

    /// Open a JSON object.
    pub fn begin_object(&mut self) -> Result<(), JsonError> {
        self.before_value()?;
        self.formatter.begin_object(&mut self.out)?;
        self.scopes.push(Scope {
            kind: ScopeKind::Object,
            first: true,
            awaiting_value: false,
        });
        Ok(())
    }

    /// Close the innermost JSON object.
    pub fn end_object(&mut self) -> Result<(), JsonError> {
        match self.scopes.pop() {
            Some(Scope {
                kind: ScopeKind::Object,
                awaiting_value: false,
                ..
            }) => {}
            Some(Scope {
                kind: ScopeKind::Object,
                ..
            }) => return Err(JsonError::InvalidState("member name without a value")),
            _ => return Err(JsonError::InvalidState("end_object outside of an object")),
        }
        self.formatter.end_object(&mut self.out)?;
        self.after_value()
    }

    /// Open a JSON array.
    pub fn begin_array(&mut self) -> Result<(), JsonError> {
        self.before_value()?;
        self.formatter.begin_array(&mut self.out)?;
        self.scopes.push(Scope {
            kind: ScopeKind::Array,
            first: true,
            awaiting_value: false,
        });
        Ok(())
    }

    /// Close the innermost JSON array.
    pub fn end_array(&mut self) -> Result<(), JsonError> {
        match self.scopes.pop() {
            Some(Scope {
                kind: ScopeKind::Array,
                ..
            }) => {}
            _ => return Err(JsonError::InvalidState("end_array outside of an array")),
        }
        self.formatter.end_array(&mut self.out)?;
        self.after_value()
    }

    /// Write a member name inside the current object.
    ///
    /// The name is written verbatim (after JSON escaping); no case
    /// conversion is applied.
    pub fn name(&mut self, name: &str) -> Result<(), JsonError> {
        let Some(scope) = self.scopes.last_mut() else {
            return Err(JsonError::InvalidState("member name outside of an object"));
        };
        if scope.kind != ScopeKind::Object {
            return Err(JsonError::InvalidState("member name inside an array"));
        }
        if scope.awaiting_value {
            return Err(JsonError::InvalidState("member name without a value"));
        }
        self.formatter.begin_object_key(&mut self.out, scope.first)?;
        serde_json::to_writer(&mut self.out, name).map_err(io::Error::from)?;
        self.formatter.end_object_key(&mut self.out)?;
        self.formatter.begin_object_value(&mut self.out)?;
        scope.first = false;
        scope.awaiting_value = true;
        Ok(())
    }

    /// Write a string value.
    pub fn string(&mut self, value: &str) -> Result<(), JsonError> {
        self.before_value()?;
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)?;
        self.after_value()
    }

    /// Write a boolean value.
    pub fn boolean(&mut self, value: bool) -> Result<(), JsonError> {
        self.before_value()?;
        self.formatter.write_bool(&mut self.out, value)?;
        self.after_value()
    }

    /// Write a 32-bit integer value.
    pub fn integer(&mut self, value: i32) -> Result<(), JsonError> {
        self.before_value()?;
        self.formatter.write_i32(&mut self.out, value)?;
        self.after_value()
    }

    /// Write a 64-bit integer value.
    pub fn long(&mut self, value: i64) -> Result<(), JsonError> {
        self.before_value()?;
        self.formatter.write_i64(&mut self.out, value)?;
        self.after_value()
    }

    /// Write a double value. `NaN` and infinities have no JSON representation
    /// and are rejected.
    pub fn double(&mut self, value: f64) -> Result<(), JsonError> {
        if !value.is_finite() {
            return Err(JsonError::InvalidValue(format!(
                "{value} cannot be represented in JSON"
            )));
        }
        self.before_value()?;
        self.formatter.write_f64(&mut self.out, value)?;
        self.after_value()
    }

    /// Write a blob as a base64 string.
    pub fn blob(&mut self, value: &[u8]) -> Result<(), JsonError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(value);
        self.string(&encoded)
    }

    /// Write a timestamp as epoch seconds.
    ///
    /// Whole seconds are written as an integer. Otherwise the fraction carries
    /// every significant nanosecond digit, so no precision is lost.
    pub fn timestamp(&mut self, value: &chrono::DateTime<chrono::Utc>) -> Result<(), JsonError> {
        let secs = value.timestamp();
        // Leap seconds report nanos past one second.
        let nanos = value.timestamp_subsec_nanos().min(999_999_999);
        if nanos == 0 {
            return self.long(secs);
        }
        let mut text = if secs < 0 {
            format!("-{}.{:09}", -(secs + 1), 1_000_000_000 - nanos)
        } else {
            format!("{secs}.{nanos:09}")
        };
        text.truncate(text.trim_end_matches('0').len());
        self.before_value()?;
        self.formatter.write_number_str(&mut self.out, &text)?;
        self.after_value()
    }

    /// Write a JSON `null`.
    pub fn null(&mut self) -> Result<(), JsonError> {
        self.before_value()?;
        self.formatter.write_null(&mut self.out)?;
        self.after_value()
    }

    fn before_value(&mut self) -> Result<(), JsonError> {
        match self.scopes.last_mut() {
            None if self.root_written => {
                Err(JsonError::InvalidState("more than one top-level value"))
            }
            None => Ok(()),
            Some(scope) => match scope.kind {
                ScopeKind::Object if !scope.awaiting_value => {
                    Err(JsonError::InvalidState("object value without a member name"))
                }
                ScopeKind::Object => Ok(()),
                ScopeKind::Array => {
                    self.formatter.begin_array_value(&mut self.out, scope.first)?;
                    scope.first = false;
                    Ok(())
                }
            },
        }
    }

    fn after_value(&mut self) -> Result<(), JsonError> {
        match self.scopes.last_mut() {
            None => self.root_written = true,
            Some(scope) => match scope.kind {
                ScopeKind::Object => {
                    self.formatter.end_object_value(&mut self.out)?;
                    scope.awaiting_value = false;
                }
                ScopeKind::Array => self.formatter.end_array_value(&mut self.out)?,
            },
        }
        Ok(())
    }
}
