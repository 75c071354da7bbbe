//! Cognito Identity Provider model types.
//!
//! Structures, string enums and operation inputs/outputs are declared once
//! through the `json_structure!`/`string_enum!` macros of `cognito-idp-json`,
//! which generate the JSON marshaller and unmarshaller of every type. The
//! [`error`] module holds the error-code registry used to turn service error
//! responses into [`CognitoError`]s.
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::upper_case_acronyms)]
#![allow(missing_docs)]

pub mod enums;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{CognitoError, CognitoErrorKind, ErrorType, JsonErrorResponse};
pub use operations::{CognitoIdpOperation, OperationInput};
