//! Enumerated argument values accepted by the API.
//!
//! Each enum parses case-insensitively and rejects anything outside its set
//! with `Error::Validation`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every accepted value, in wire form.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Get the wire form of the value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(Error::Validation(format!(
                        "{} must be one of: {}",
                        $label,
                        Self::VALUES.join(", ")
                    ))),
                }
            }
        }
    };
}

string_enum! {
    /// Date comparison used by unsubscribe searches.
    SearchType, "search_type" {
        Before => "before",
        After => "after",
        Between => "between",
        Not => "not",
        Exact => "exact",
        Exactly => "exactly",
    }
}

string_enum! {
    /// Kind of a custom data field.
    FieldType, "field_type" {
        Text => "text",
        Textarea => "textarea",
        Number => "number",
        Dropdown => "dropdown",
        Checkbox => "checkbox",
        Radiobutton => "radiobutton",
        Date => "date",
    }
}

string_enum! {
    /// Date comparison used by the SMS unsubscribe report.
    SmsUnsubscribeType, "type" {
        On => "on",
        Before => "before",
        After => "after",
    }
}

impl Default for SmsUnsubscribeType {
    fn default() -> Self {
        Self::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BEFORE".parse::<SearchType>().unwrap(), SearchType::Before);
        assert_eq!(" Exactly ".parse::<SearchType>().unwrap(), SearchType::Exactly);
        assert_eq!("RadioButton".parse::<FieldType>().unwrap(), FieldType::Radiobutton);
        assert_eq!("On".parse::<SmsUnsubscribeType>().unwrap(), SmsUnsubscribeType::On);
    }

    #[test]
    fn test_out_of_set_values_fail_validation() {
        let err = "during".parse::<SmsUnsubscribeType>().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "type must be one of: on, before, after");

        assert!(matches!("email".parse::<FieldType>(), Err(Error::Validation(_))));
        assert!(matches!("since".parse::<SearchType>(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_serializes_wire_form() {
        assert_eq!(serde_json::to_string(&FieldType::Textarea).unwrap(), r#""textarea""#);
        assert_eq!(serde_json::to_string(&SearchType::Not).unwrap(), r#""not""#);
        assert_eq!(SmsUnsubscribeType::default().to_string(), "on");
    }
}
