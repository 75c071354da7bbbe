//! JSON wire-format primitives for the Cognito Identity Provider API.
//!
//! The API speaks AWS JSON 1.1: request and response bodies are JSON objects
//! whose member names are the model's PascalCase wire names. This crate
//! provides:
//!
//! - [`JsonWriter`], a streaming writer that emits compact JSON.
//! - [`JsonReader`], a pull cursor that reads members in any order and can
//!   skip values it does not understand.
//! - The [`JsonMarshall`] and [`JsonUnmarshall`] traits, implemented for the
//!   wire primitives (strings, numbers, booleans, blobs, timestamps, lists,
//!   maps).
//! - [`json_structure!`] and [`string_enum!`], which generate model types
//!   together with their marshallers.

mod blob;
mod codec;
mod error;
mod macros;
mod reader;
mod writer;

pub use blob::Blob;
pub use codec::{JsonMarshall, JsonUnmarshall, from_slice, to_vec, to_writer};
pub use error::JsonError;
pub use reader::JsonReader;
pub use writer::JsonWriter;
