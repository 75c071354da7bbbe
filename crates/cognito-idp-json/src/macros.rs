//! Declarative generators for wire structures and string enumerations.

/// Declare a wire structure and its JSON marshaller/unmarshaller.
///
/// Every field is optional. The marshaller writes set fields in declaration
/// order under their wire names and omits unset ones. The unmarshaller
/// accepts members in any order, leaves a field unset when its value is
/// `null`, and skips members with unrecognised names.
///
/// ```
/// cognito_idp_json::json_structure! {
///     /// A delivery option.
///     pub struct RecoveryOption {
///         "Priority" => priority: i32,
///         "Name" => name: String,
///     }
/// }
///
/// let value: RecoveryOption = cognito_idp_json::from_slice(br#"{"Name":"x","Extra":[1]}"#).unwrap();
/// assert_eq!(value.name.as_deref(), Some("x"));
/// assert_eq!(value.priority, None);
/// ```
#[macro_export]
macro_rules! json_structure {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $wire:literal => $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: ::std::option::Option<$ty>,
            )*
        }

        impl $name {
            /// Member names as they appear on the wire, in marshalling order.
            pub const WIRE_NAMES: &'static [&'static str] = &[$($wire),*];
        }

        impl $crate::JsonMarshall for $name {
            fn marshall<W: ::std::io::Write>(
                &self,
                writer: &mut $crate::JsonWriter<W>,
            ) -> ::std::result::Result<(), $crate::JsonError> {
                writer.begin_object()?;
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        writer.name($wire)?;
                        $crate::JsonMarshall::marshall(value, writer)?;
                    }
                )*
                writer.end_object()
            }
        }

        impl $crate::JsonUnmarshall for $name {
            #[allow(unused_mut)]
            fn unmarshall(
                reader: &mut $crate::JsonReader,
            ) -> ::std::result::Result<Self, $crate::JsonError> {
                let mut out = Self::default();
                reader.begin_object()?;
                while reader.has_next()? {
                    let name = reader.next_name()?;
                    match name.as_str() {
                        $(
                            $wire => {
                                out.$field =
                                    <$ty as $crate::JsonUnmarshall>::unmarshall_optional(reader)?;
                            }
                        )*
                        _ => reader.skip_member(&name)?,
                    }
                }
                reader.end_object()?;
                ::std::result::Result::Ok(out)
            }
        }
    };
}

/// Declare a string enumeration with an `Unknown` catch-all.
///
/// Values outside the declared set round-trip through `Unknown` unchanged.
///
/// ```
/// cognito_idp_json::string_enum! {
///     /// Delivery medium.
///     pub enum Medium {
///         Sms => "SMS",
///         Email => "EMAIL",
///     }
/// }
///
/// assert_eq!(Medium::from("EMAIL"), Medium::Email);
/// assert_eq!(Medium::from("FAX").as_str(), "FAX");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value this crate does not know about.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Every known wire value.
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            /// The wire value of this variant.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(s) => s.as_str(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::JsonMarshall for $name {
            fn marshall<W: ::std::io::Write>(
                &self,
                writer: &mut $crate::JsonWriter<W>,
            ) -> ::std::result::Result<(), $crate::JsonError> {
                writer.string(self.as_str())
            }
        }

        impl $crate::JsonUnmarshall for $name {
            fn unmarshall(
                reader: &mut $crate::JsonReader,
            ) -> ::std::result::Result<Self, $crate::JsonError> {
                reader.read_string().map(|s| Self::from(s.as_str()))
            }
        }
    };
}
