//! Marshalling traits and their implementations for wire primitives.

use std::collections::HashMap;
use std::io::Write;

use chrono::{DateTime, Utc};

use crate::blob::Blob;
use crate::error::JsonError;
use crate::reader::JsonReader;
use crate::writer::JsonWriter;

/// A value that can be written to the JSON wire format.
pub trait JsonMarshall {
    /// Write `self` as the next value of `writer`.
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError>;
}

/// A value that can be read from the JSON wire format.
pub trait JsonUnmarshall: Sized {
    /// Read the pending value of `reader` as `Self`.
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError>;

    /// Like [`JsonUnmarshall::unmarshall`], but a JSON `null` is consumed
    /// and yields `None`.
    fn unmarshall_optional(reader: &mut JsonReader) -> Result<Option<Self>, JsonError> {
        if reader.peek_null()? {
            reader.skip_value()?;
            return Ok(None);
        }
        Self::unmarshall(reader).map(Some)
    }
}

/// Marshall `value` into a new buffer.
pub fn to_vec<T: JsonMarshall + ?Sized>(value: &T) -> Result<Vec<u8>, JsonError> {
    let mut writer = JsonWriter::new(Vec::with_capacity(128));
    value.marshall(&mut writer)?;
    Ok(writer.into_inner())
}

/// Marshall `value` into `out`.
pub fn to_writer<W: Write, T: JsonMarshall + ?Sized>(out: W, value: &T) -> Result<(), JsonError> {
    let mut writer = JsonWriter::new(out);
    value.marshall(&mut writer)
}

/// Unmarshall a complete document.
pub fn from_slice<T: JsonUnmarshall>(input: &[u8]) -> Result<T, JsonError> {
    let mut reader = JsonReader::from_slice(input)?;
    let value = T::unmarshall(&mut reader)?;
    reader.finish()?;
    Ok(value)
}

impl JsonMarshall for str {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.string(self)
    }
}

impl JsonMarshall for String {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.string(self)
    }
}

impl JsonUnmarshall for String {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_string()
    }
}

impl JsonMarshall for bool {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.boolean(*self)
    }
}

impl JsonUnmarshall for bool {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_bool()
    }
}

impl JsonMarshall for i32 {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.integer(*self)
    }
}

impl JsonUnmarshall for i32 {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_i32()
    }
}

impl JsonMarshall for i64 {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.long(*self)
    }
}

impl JsonUnmarshall for i64 {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_i64()
    }
}

impl JsonMarshall for f64 {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.double(*self)
    }
}

impl JsonUnmarshall for f64 {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_f64()
    }
}

impl JsonMarshall for Blob {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.blob(self.as_bytes())
    }
}

impl JsonUnmarshall for Blob {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_blob().map(Blob::from)
    }
}

impl JsonMarshall for DateTime<Utc> {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.timestamp(self)
    }
}

impl JsonUnmarshall for DateTime<Utc> {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.read_timestamp()
    }
}

impl<T: JsonMarshall> JsonMarshall for [T] {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        writer.begin_array()?;
        for item in self {
            item.marshall(writer)?;
        }
        writer.end_array()
    }
}

impl<T: JsonMarshall> JsonMarshall for Vec<T> {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        self.as_slice().marshall(writer)
    }
}

/// `null` elements are dropped.
impl<T: JsonUnmarshall> JsonUnmarshall for Vec<T> {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.begin_array()?;
        let mut items = Vec::new();
        while reader.has_next()? {
            if let Some(item) = T::unmarshall_optional(reader)? {
                items.push(item);
            }
        }
        reader.end_array()?;
        Ok(items)
    }
}

/// Entries are written in key order so output is deterministic.
impl<T: JsonMarshall> JsonMarshall for HashMap<String, T> {
    fn marshall<W: Write>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        writer.begin_object()?;
        for (key, value) in entries {
            writer.name(key)?;
            value.marshall(writer)?;
        }
        writer.end_object()
    }
}

/// Entries whose value is `null` are dropped.
impl<T: JsonUnmarshall> JsonUnmarshall for HashMap<String, T> {
    fn unmarshall(reader: &mut JsonReader) -> Result<Self, JsonError> {
        reader.begin_object()?;
        let mut map = HashMap::new();
        while reader.has_next()? {
            let key = reader.next_name()?;
            if let Some(value) = T::unmarshall_optional(reader)? {
                map.insert(key, value);
            }
        }
        reader.end_object()?;
        Ok(map)
    }
}
