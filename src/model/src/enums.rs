// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements common code for enumerations.
//!
//! The service sends enumerations as JSON strings. The set of values may grow
//! over time, so every enum has an `UnknownValue` variant that preserves the
//! string it was created from. Deserializing a value from the future never
//! fails, and serializing it produces the original string.

/// Defines an enum sent as a string on the wire.
///
/// The generated type implements `name()`, `From<&str>`, `From<String>`,
/// `FromStr`, `Display`, and the serde traits.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Use this variant to handle new values that are not yet known to
            /// this library.
            UnknownValue(String),
        }

        impl $name {
            /// Gets the string used on the wire for this value.
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::UnknownValue(value) => value.as_str(),
                }
            }

            /// Returns true if the value is not known to this library.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::UnknownValue(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    _ => Self::UnknownValue(value.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;
            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::de::Deserialize>::deserialize(deserializer)?;
                let value = Self::from(value);
                if let Self::UnknownValue(v) = &value {
                    tracing::debug!(
                        enumeration = stringify!($name),
                        value = %v,
                        "unknown enum value, update the library"
                    );
                }
                Ok(value)
            }
        }
    };
}
