//! # Type Descriptors
//!
//! A type descriptor is the short string that tells the prompt what to
//! expect from the user:
//!
//! ```text
//! [&]baseType[:arguments]
//! ```
//!
//! - `int`, `email`, `hexColor`, ... select a [`Scalar`] validator.
//! - `array` / `array:int` checks every comma-separated item (one item type at most).
//! - `tuple:int|str|bool` checks item *i* against type *i* and the item count.
//! - `enum:red|green|blue` accepts one of the listed values.
//! - `regex:^[A-Z]{3}$` accepts input matching the pattern (everything after
//!   the first `:` is the pattern, so patterns may contain `:` and `|`).
//! - A leading `&` is accepted and ignored.
//!
//! Parsing turns the string into a [`TypeDescriptor`], a closed enum, so the
//! dispatch from type to validator is a plain `match`. Mistakes in the
//! descriptor itself are a [`DescriptorError`]: they point at the caller, not
//! at the user, and are never retried.
//!
//! ## Example
//! ```rust
//! use typed_input::utils::{TypeDescriptor, Value};
//!
//! let descriptor: TypeDescriptor = "tuple:int|str".parse().unwrap();
//! assert_eq!(
//!     descriptor.validate("5, hello"),
//!     Ok(Value::Tuple(vec!["5".into(), "hello".into()]))
//! );
//! assert!(descriptor.validate("5,hello,extra").is_err());
//! ```
use crate::utils::validators::{
    Scalar, Validate, ValidationError, Value, validate_array, validate_enum, validate_regex,
    validate_tuple,
};
use regex::Regex;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Prefix marker stripped before the base type is read.
const MARKER: char = '&';

/// A parsed type descriptor.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    Scalar(Scalar),
    Array(Option<Scalar>),
    Tuple(Vec<Scalar>),
    Enum(Vec<String>),
    Regex(Regex),
}

/// A descriptor that cannot be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("unknown type `{0}`")]
    UnknownType(String),
    #[error("unsupported item type `{0}`")]
    UnknownItemType(String),
    #[error("`{0}` cannot be used as an item type")]
    CompoundItemType(String),
    #[error("`array` takes a single item type, got {0}")]
    TooManyItemTypes(usize),
    #[error("`tuple` needs at least one item type, e.g. `tuple:int|str`")]
    EmptyTuple,
    #[error("`enum` needs at least one option, e.g. `enum:red|green`")]
    EmptyEnum,
    #[error("`regex` needs a pattern, e.g. `regex:^[a-z]+$`")]
    MissingPattern,
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl TypeDescriptor {
    /// Parses a descriptor string.
    pub fn parse(descriptor: &str) -> Result<TypeDescriptor, DescriptorError> {
        let descriptor = descriptor.strip_prefix(MARKER).unwrap_or(descriptor);
        let (base, args) = match descriptor.split_once(':') {
            Some((base, args)) => (base, Some(args)),
            None => (descriptor, None),
        };

        match base {
            "array" => {
                let item_types = parse_item_types(args)?;
                match item_types.as_slice() {
                    [] => Ok(TypeDescriptor::Array(None)),
                    [item] => Ok(TypeDescriptor::Array(Some(*item))),
                    many => Err(DescriptorError::TooManyItemTypes(many.len())),
                }
            }
            "tuple" => {
                let item_types = parse_item_types(args)?;
                if item_types.is_empty() {
                    return Err(DescriptorError::EmptyTuple);
                }
                Ok(TypeDescriptor::Tuple(item_types))
            }
            "enum" => {
                let options: Vec<String> = args
                    .filter(|args| !args.is_empty())
                    .map(|args| args.split('|').map(str::to_string).collect())
                    .unwrap_or_default();
                if options.is_empty() {
                    return Err(DescriptorError::EmptyEnum);
                }
                Ok(TypeDescriptor::Enum(options))
            }
            "regex" => {
                let pattern = args
                    .filter(|args| !args.is_empty())
                    .ok_or(DescriptorError::MissingPattern)?;
                Regex::new(pattern)
                    .map(TypeDescriptor::Regex)
                    .map_err(|e| DescriptorError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })
            }
            other => other
                .parse::<Scalar>()
                .map(TypeDescriptor::Scalar)
                .map_err(|_| DescriptorError::UnknownType(other.to_string())),
        }
    }

    /// Runs the validator selected by this descriptor.
    pub fn validate(&self, input: &str) -> Result<Value, ValidationError> {
        match self {
            TypeDescriptor::Scalar(scalar) => scalar.validate(input),
            TypeDescriptor::Array(item_type) => validate_array(input, *item_type),
            TypeDescriptor::Tuple(item_types) => validate_tuple(input, item_types),
            TypeDescriptor::Enum(options) => validate_enum(input, options),
            TypeDescriptor::Regex(pattern) => validate_regex(input, pattern),
        }
    }
}

/// Item types of `array` / `tuple`, separated by `|`.
fn parse_item_types(args: Option<&str>) -> Result<Vec<Scalar>, DescriptorError> {
    let Some(args) = args.filter(|args| !args.is_empty()) else {
        return Ok(Vec::new());
    };

    args.split('|')
        .map(|name| match name {
            "array" | "tuple" | "enum" | "regex" => {
                Err(DescriptorError::CompoundItemType(name.to_string()))
            }
            _ => name
                .parse::<Scalar>()
                .map_err(|_| DescriptorError::UnknownItemType(name.to_string())),
        })
        .collect()
}

impl FromStr for TypeDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeDescriptor::parse(s)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |types: &[Scalar]| {
            types
                .iter()
                .map(Scalar::name)
                .collect::<Vec<_>>()
                .join("|")
        };

        match self {
            Self::Scalar(scalar) => write!(f, "{}", scalar),
            Self::Array(None) => write!(f, "array"),
            Self::Array(Some(item)) => write!(f, "array:{}", item),
            Self::Tuple(items) => write!(f, "tuple:{}", join(items)),
            Self::Enum(options) => write!(f, "enum:{}", options.join("|")),
            Self::Regex(pattern) => write!(f, "regex:{}", pattern.as_str()),
        }
    }
}
