//! # Type Validators
//!
//! The leaf layer of the prompt: pure functions that take one raw token
//! (as typed by the user) and either coerce it into a [`Value`] or reject it
//! with a [`ValidationError`] whose message is shown to the user before the
//! next prompt.
//!
//! Validators never keep state between calls, so validating the same input
//! twice always yields the same result.
//!
//! ## Scalar types
//!
//! | Name | Result | Accepts |
//! |------|--------|---------|
//! | `str` | [`Value::Str`] | any non-blank text |
//! | `int` | [`Value::Int`] | `42`, `-7`, `+3`, `007` |
//! | `float` / `num` | [`Value::Float`] | `2.5`, `.5`, `1e10` |
//! | `bool` | [`Value::Bool`] | `true` / `false`, any case |
//! | `date` | [`Value::Date`] | ISO 8601 / RFC 3339 / RFC 2822 and a few common forms |
//! | `email` | [`Value::Str`] | a normalized email address |
//! | `url` | [`Value::Str`] | `[http(s)://]host.tld[/path]` |
//! | `uuid` | [`Value::Str`] | hyphenated UUID of any version |
//! | `time` | [`Value::Str`] | `HH:MM` or `HH:MM:SS` |
//! | `ip` | [`Value::Str`] | dotted-quad IPv4 |
//! | `hexColor` | [`Value::Str`] | `#RGB` or `#RRGGBB` |
//! | `creditCard` | [`Value::Str`] | 16 digits passing the Luhn checksum |
//! | `positive` / `negative` | [`Value::Float`] | a number `> 0` / `< 0` |
//!
//! Compound and parameterized types (`array`, `tuple`, `enum`, `regex`) are
//! handled by [`validate_array`], [`validate_tuple`], [`validate_enum`] and
//! [`validate_regex`]; they are wired together by
//! [`crate::utils::TypeDescriptor`].
//!
//! ## Example
//! ```rust
//! use typed_input::utils::{Scalar, Validate, Value};
//!
//! assert_eq!(Scalar::Int.validate(" 42 "), Ok(Value::Int(42)));
//! assert_eq!(Scalar::Bool.validate("TRUE"), Ok(Value::Bool(true)));
//! assert!(Scalar::HexColor.validate("#12345").is_err());
//! ```
use crate::utils::email;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

static INT_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid int pattern"));
static FLOAT_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?[0-9]*(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$").expect("valid float pattern")
});
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?")
        .expect("valid float prefix pattern")
});
static URL_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:[A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(?:/[A-Za-z0-9_-]*)*$")
        .expect("valid url pattern")
});
static TIME_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[01]?[0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?$").expect("valid time pattern")
});
static IPV4_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    let octet = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
    Regex::new(&format!(r"^{octet}\.{octet}\.{octet}\.{octet}$")).expect("valid ip pattern")
});
static HEX_COLOR_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("valid hex pattern"));
static CARD_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]{4}[- ]?){3}[0-9]{4}$").expect("valid card pattern"));

/// Naive date-time layouts tried after RFC 3339 / RFC 2822. Interpreted as UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Minute-precision layouts with an explicit offset, which RFC 3339 lacks.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

static PARTIAL_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})(?:-([0-9]{2}))?$").expect("valid partial date pattern")
});

/// Date-only layouts, taken as midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// A successfully coerced answer.
///
/// `Array` and `Tuple` always carry the trimmed item strings: item types are
/// used to check the shape of each item, not to convert it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(DateTime<Utc>),
    Array(Vec<String>),
    Tuple(Vec<String>),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Self::Array(items) | Self::Tuple(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// Why a raw token was rejected.
///
/// The `Display` text is the exact message printed to the user; the prompt
/// loop appends the exit hint to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid string. Please enter a non-empty string.")]
    EmptyString,
    #[error("Invalid integer. Please enter a valid integer.")]
    Integer,
    #[error("Invalid float. Please enter a valid floating-point number.")]
    Float,
    #[error("Invalid number. Please enter a valid number.")]
    Number,
    #[error("Invalid boolean. Please enter 'true' or 'false'.")]
    Bool,
    #[error("Invalid date. Please enter a valid date.")]
    Date,
    #[error("Invalid email. Please enter a valid email address.")]
    Email,
    #[error("Invalid URL. Please enter a valid URL.")]
    Url,
    #[error("Invalid UUID. Please enter a valid UUID.")]
    Uuid,
    #[error("Invalid array item. Ensure each item is correctly formatted.")]
    ArrayItem,
    #[error("Invalid tuple. Expected a tuple of length {0}.")]
    TupleLength(usize),
    #[error("Invalid item at index {0}. Ensure the item is correctly formatted.")]
    TupleItem(usize),
    #[error("Invalid time format. Please enter time in HH:MM or HH:MM:SS format.")]
    Time,
    #[error("Invalid IP address. Please enter a valid IP address.")]
    Ip,
    #[error("Invalid hex color code. Please enter a valid hex color code (e.g., #RRGGBB).")]
    HexColor,
    #[error("Invalid credit card number. Please enter a valid credit card number.")]
    CreditCard,
    #[error("Invalid option. Valid options are: {}.", .0.join(", "))]
    NotAnOption(Vec<String>),
    #[error(
        "Input does not match the pattern. Please ensure the input matches the expected pattern."
    )]
    PatternMismatch,
    #[error("Must be a positive number. Please enter a number greater than zero.")]
    NotPositive,
    #[error("Must be a negative number. Please enter a number less than zero.")]
    NotNegative,
}

/// Anything that can check a raw token and coerce it into a [`Value`].
pub trait Validate {
    fn validate(&self, input: &str) -> Result<Value, ValidationError>;
}

/// Parses `$input` as `$t`, mapping any parse failure to `$err`.
///
/// # Example
/// ```rust,ignore
/// let n: i64 = check_type!("42", i64, ValidationError::Integer)?;
/// ```
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(v) => Ok(v),
            Err(_) => Err($err),
        }
    };
}

/// The argument-free base types.
///
/// These are also the only types allowed as item types of `array` and
/// `tuple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Str,
    Int,
    Float,
    Num,
    Bool,
    Date,
    Email,
    Url,
    Uuid,
    Time,
    Ip,
    HexColor,
    CreditCard,
    Positive,
    Negative,
}

impl Scalar {
    pub const ALL: [Scalar; 15] = [
        Scalar::Str,
        Scalar::Int,
        Scalar::Float,
        Scalar::Num,
        Scalar::Bool,
        Scalar::Date,
        Scalar::Email,
        Scalar::Url,
        Scalar::Uuid,
        Scalar::Time,
        Scalar::Ip,
        Scalar::HexColor,
        Scalar::CreditCard,
        Scalar::Positive,
        Scalar::Negative,
    ];

    /// The name used for this type in a type descriptor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Num => "num",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Email => "email",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::Time => "time",
            Self::Ip => "ip",
            Self::HexColor => "hexColor",
            Self::CreditCard => "creditCard",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scalar {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scalar::ALL
            .into_iter()
            .find(|scalar| scalar.name() == s)
            .ok_or(())
    }
}

impl Validate for Scalar {
    fn validate(&self, input: &str) -> Result<Value, ValidationError> {
        let clean = input.trim();

        match self {
            Scalar::Str => {
                if clean.is_empty() {
                    Err(ValidationError::EmptyString)
                } else {
                    Ok(Value::Str(clean.to_string()))
                }
            }
            Scalar::Int => {
                if !INT_SYNTAX.is_match(clean) {
                    return Err(ValidationError::Integer);
                }
                check_type!(clean, i64, ValidationError::Integer).map(Value::Int)
            }
            Scalar::Float => parse_float(clean)
                .map(Value::Float)
                .ok_or(ValidationError::Float),
            Scalar::Num => parse_float(clean)
                .map(Value::Float)
                .ok_or(ValidationError::Number),
            Scalar::Bool => match clean.to_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(ValidationError::Bool),
            },
            Scalar::Date => parse_date(clean)
                .map(Value::Date)
                .ok_or(ValidationError::Date),
            Scalar::Email => email::normalize(clean)
                .filter(|normalized| email::is_email(normalized))
                .map(Value::Str)
                .ok_or(ValidationError::Email),
            Scalar::Url => matching(&URL_SYNTAX, clean, ValidationError::Url),
            Scalar::Uuid => {
                if clean.len() == 36 && uuid::Uuid::try_parse(clean).is_ok() {
                    Ok(Value::Str(clean.to_string()))
                } else {
                    Err(ValidationError::Uuid)
                }
            }
            Scalar::Time => matching(&TIME_SYNTAX, clean, ValidationError::Time),
            Scalar::Ip => matching(&IPV4_SYNTAX, clean, ValidationError::Ip),
            Scalar::HexColor => matching(&HEX_COLOR_SYNTAX, clean, ValidationError::HexColor),
            Scalar::CreditCard => {
                let digits: String = clean.chars().filter(|c| c.is_ascii_digit()).collect();
                if CARD_SYNTAX.is_match(&digits) && passes_luhn(&digits) {
                    Ok(Value::Str(digits))
                } else {
                    Err(ValidationError::CreditCard)
                }
            }
            Scalar::Positive => match parse_float_prefix(clean) {
                Some(n) if n > 0.0 => Ok(Value::Float(n)),
                _ => Err(ValidationError::NotPositive),
            },
            Scalar::Negative => match parse_float_prefix(clean) {
                Some(n) if n < 0.0 => Ok(Value::Float(n)),
                _ => Err(ValidationError::NotNegative),
            },
        }
    }
}

fn matching(pattern: &Regex, clean: &str, err: ValidationError) -> Result<Value, ValidationError> {
    if pattern.is_match(clean) {
        Ok(Value::Str(clean.to_string()))
    } else {
        Err(err)
    }
}

/// Strict float syntax: the whole token must be a decimal number.
fn parse_float(clean: &str) -> Option<f64> {
    if matches!(clean, "" | "." | "+" | "-") || !FLOAT_SYNTAX.is_match(clean) {
        return None;
    }
    check_type!(clean, f64, ())
        .ok()
        .filter(|n: &f64| n.is_finite())
}

/// Lenient float parsing: reads the longest numeric prefix, so `12abc` is 12.
fn parse_float_prefix(clean: &str) -> Option<f64> {
    let prefix = FLOAT_PREFIX.find(clean)?.as_str();
    check_type!(prefix, f64, ()).ok()
}

fn parse_date(clean: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(clean) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(clean) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(clean, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    // `Z` means UTC, which is how naive layouts are read anyway.
    let clean = clean
        .strip_suffix(['Z', 'z'])
        .filter(|rest| rest.contains('T'))
        .unwrap_or(clean);
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(clean, fmt).ok())
    {
        return Some(dt.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(clean, fmt).ok())
        .or_else(|| parse_partial_date(clean))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `YYYY` or `YYYY-MM`, on the first day of the period.
fn parse_partial_date(clean: &str) -> Option<NaiveDate> {
    let caps = PARTIAL_DATE.captures(clean)?;
    let year = caps[1].parse().ok()?;
    let month = caps.get(2).map_or(Some(1), |m| m.as_str().parse().ok())?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Luhn checksum over an ASCII digit string.
///
/// Walks from the least significant digit, doubling every second one and
/// folding doubled values above 9 back into a single digit.
pub fn passes_luhn(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

fn split_items(input: &str) -> Vec<String> {
    input
        .trim()
        .split(',')
        .map(|item| item.trim().to_string())
        .collect()
}

/// Splits on commas and checks every item against `item_type`, if any.
pub fn validate_array(input: &str, item_type: Option<Scalar>) -> Result<Value, ValidationError> {
    let items = split_items(input);

    if let Some(ty) = item_type {
        if items.iter().any(|item| ty.validate(item).is_err()) {
            return Err(ValidationError::ArrayItem);
        }
    }

    Ok(Value::Array(items))
}

/// Splits on commas and checks item `i` against `item_types[i]`.
pub fn validate_tuple(input: &str, item_types: &[Scalar]) -> Result<Value, ValidationError> {
    let items = split_items(input);

    if items.len() != item_types.len() {
        return Err(ValidationError::TupleLength(item_types.len()));
    }

    for (index, (item, ty)) in items.iter().zip(item_types).enumerate() {
        if ty.validate(item).is_err() {
            return Err(ValidationError::TupleItem(index));
        }
    }

    Ok(Value::Tuple(items))
}

pub fn validate_enum(input: &str, options: &[String]) -> Result<Value, ValidationError> {
    let clean = input.trim();

    if options.iter().any(|option| option == clean) {
        Ok(Value::Str(clean.to_string()))
    } else {
        Err(ValidationError::NotAnOption(options.to_vec()))
    }
}

/// Succeeds when `pattern` matches anywhere in the trimmed input.
pub fn validate_regex(input: &str, pattern: &Regex) -> Result<Value, ValidationError> {
    matching(pattern, input.trim(), ValidationError::PatternMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_str_trims_and_rejects_blank() {
        assert_eq!(Scalar::Str.validate("  hi  "), Ok(Value::Str("hi".into())));
        assert_eq!(Scalar::Str.validate("   "), Err(ValidationError::EmptyString));
        assert_eq!(
            ValidationError::EmptyString.to_string(),
            "Invalid string. Please enter a non-empty string."
        );
    }

    #[test]
    fn test_int_syntax() {
        assert_eq!(Scalar::Int.validate("42"), Ok(Value::Int(42)));
        assert_eq!(Scalar::Int.validate(" -7 "), Ok(Value::Int(-7)));
        assert_eq!(Scalar::Int.validate("+3"), Ok(Value::Int(3)));
        assert_eq!(Scalar::Int.validate("0"), Ok(Value::Int(0)));
        assert_eq!(Scalar::Int.validate("007"), Ok(Value::Int(7)));
        assert_eq!(Scalar::Int.validate("-00"), Ok(Value::Int(0)));
        assert!(Scalar::Int.validate("4.2").is_err());
        assert!(Scalar::Int.validate("abc").is_err());
        assert!(Scalar::Int.validate("").is_err());
        assert!(Scalar::Int.validate("99999999999999999999").is_err()); // overflow
    }

    #[test]
    fn test_float_and_num_syntax() {
        assert_eq!(Scalar::Float.validate("2.5"), Ok(Value::Float(2.5)));
        assert_eq!(Scalar::Float.validate(".5"), Ok(Value::Float(0.5)));
        assert_eq!(Scalar::Float.validate("1e3"), Ok(Value::Float(1000.0)));
        assert_eq!(Scalar::Num.validate("-2"), Ok(Value::Float(-2.0)));
        assert_eq!(Scalar::Float.validate("."), Err(ValidationError::Float));
        assert_eq!(Scalar::Float.validate("-"), Err(ValidationError::Float));
        assert_eq!(Scalar::Float.validate("inf"), Err(ValidationError::Float));
        assert_eq!(Scalar::Float.validate("NaN"), Err(ValidationError::Float));
        assert_eq!(Scalar::Num.validate("1.2.3"), Err(ValidationError::Number));
    }

    #[test]
    fn test_bool_is_case_insensitive_literal() {
        assert_eq!(Scalar::Bool.validate("TRUE"), Ok(Value::Bool(true)));
        assert_eq!(Scalar::Bool.validate(" False "), Ok(Value::Bool(false)));
        assert_eq!(Scalar::Bool.validate("yes"), Err(ValidationError::Bool));
        assert_eq!(Scalar::Bool.validate("1"), Err(ValidationError::Bool));
    }

    #[test]
    fn test_date_forms() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(Scalar::Date.validate("2024-03-15"), Ok(Value::Date(midnight)));
        assert_eq!(Scalar::Date.validate("03/15/2024"), Ok(Value::Date(midnight)));
        assert_eq!(
            Scalar::Date.validate("March 15, 2024"),
            Ok(Value::Date(midnight))
        );

        let noon = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        assert_eq!(
            Scalar::Date.validate("2024-03-15T12:30:00Z"),
            Ok(Value::Date(noon))
        );
        assert_eq!(
            Scalar::Date.validate("2024-03-15 12:30"),
            Ok(Value::Date(noon))
        );
        assert_eq!(
            Scalar::Date.validate("2024-03-15T14:30:00+02:00"),
            Ok(Value::Date(noon))
        );
    }

    #[test]
    fn test_date_short_iso_forms() {
        let new_year = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Scalar::Date.validate("2024"), Ok(Value::Date(new_year)));

        let march = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(Scalar::Date.validate("2024-03"), Ok(Value::Date(march)));

        let noon = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        assert_eq!(
            Scalar::Date.validate("2024-03-15T12:30Z"),
            Ok(Value::Date(noon))
        );
        assert_eq!(
            Scalar::Date.validate("2024-03-15T14:30+02:00"),
            Ok(Value::Date(noon))
        );
        assert_eq!(
            Scalar::Date.validate("2024-03-15T12:30:00.250Z"),
            Ok(Value::Date(noon + chrono::Duration::milliseconds(250)))
        );
    }

    #[test]
    fn test_date_rejects_impossible_dates() {
        assert_eq!(Scalar::Date.validate("2024-13"), Err(ValidationError::Date));
        assert_eq!(Scalar::Date.validate("2023-02-30"), Err(ValidationError::Date));
        assert_eq!(Scalar::Date.validate("not a date"), Err(ValidationError::Date));
        assert_eq!(Scalar::Date.validate(""), Err(ValidationError::Date));
    }

    #[test]
    fn test_email_is_normalized() {
        assert_eq!(
            Scalar::Email.validate(" John.Doe+news@GMAIL.com "),
            Ok(Value::Str("johndoe@gmail.com".into()))
        );
        assert_eq!(
            Scalar::Email.validate("User@Example.ORG"),
            Ok(Value::Str("user@example.org".into()))
        );
        assert_eq!(Scalar::Email.validate("nope"), Err(ValidationError::Email));
        assert_eq!(
            Scalar::Email.validate("a@localhost"),
            Err(ValidationError::Email)
        );
    }

    #[test]
    fn test_url_pattern() {
        for ok in [
            "example.com",
            "https://example.com",
            "http://sub.example.co.uk/path/to",
            "www.example.com/",
        ] {
            assert!(Scalar::Url.validate(ok).is_ok(), "{ok}");
        }
        for bad in ["example", "ftp://example.com", "https://exa mple.com", ""] {
            assert_eq!(Scalar::Url.validate(bad), Err(ValidationError::Url), "{bad}");
        }
    }

    #[test]
    fn test_uuid_any_version() {
        assert!(
            Scalar::Uuid
                .validate("550e8400-e29b-41d4-a716-446655440000")
                .is_ok()
        );
        assert!(
            Scalar::Uuid
                .validate("00000000-0000-0000-0000-000000000000")
                .is_ok()
        );
        assert_eq!(
            Scalar::Uuid.validate("550e8400e29b41d4a716446655440000"),
            Err(ValidationError::Uuid)
        );
        assert_eq!(Scalar::Uuid.validate("not-a-uuid"), Err(ValidationError::Uuid));
    }

    #[test]
    fn test_time_ranges() {
        assert!(Scalar::Time.validate("09:30").is_ok());
        assert!(Scalar::Time.validate("23:59:59").is_ok());
        assert!(Scalar::Time.validate("7:05").is_ok());
        assert_eq!(Scalar::Time.validate("24:00"), Err(ValidationError::Time));
        assert_eq!(Scalar::Time.validate("12:60"), Err(ValidationError::Time));
        assert_eq!(Scalar::Time.validate("12:30:60"), Err(ValidationError::Time));
    }

    #[test]
    fn test_ip_octets() {
        assert!(Scalar::Ip.validate("192.168.0.1").is_ok());
        assert!(Scalar::Ip.validate("255.255.255.255").is_ok());
        assert_eq!(Scalar::Ip.validate("256.1.1.1"), Err(ValidationError::Ip));
        assert_eq!(Scalar::Ip.validate("1.2.3"), Err(ValidationError::Ip));
        assert_eq!(Scalar::Ip.validate("::1"), Err(ValidationError::Ip));
    }

    #[test]
    fn test_hex_color() {
        assert!(Scalar::HexColor.validate("#fff").is_ok());
        assert!(Scalar::HexColor.validate("#00FF7a").is_ok());
        assert_eq!(
            Scalar::HexColor.validate("fff"),
            Err(ValidationError::HexColor)
        );
        assert_eq!(
            Scalar::HexColor.validate("#abcd"),
            Err(ValidationError::HexColor)
        );
    }

    #[test]
    fn test_credit_card_luhn() {
        assert_eq!(
            Scalar::CreditCard.validate("4111 1111 1111 1111"),
            Ok(Value::Str("4111111111111111".into()))
        );
        assert!(Scalar::CreditCard.validate("4111-1111-1111-1111").is_ok());
        assert_eq!(
            Scalar::CreditCard.validate("4111111111111112"),
            Err(ValidationError::CreditCard)
        );
        // Valid Luhn but not 16 digits.
        assert_eq!(
            Scalar::CreditCard.validate("79927398713"),
            Err(ValidationError::CreditCard)
        );
    }

    #[test]
    fn test_luhn_checksum() {
        assert!(passes_luhn("79927398713"));
        assert!(!passes_luhn("79927398710"));
        assert!(!passes_luhn("12a4"));
    }

    #[test]
    fn test_positive_and_negative() {
        assert_eq!(Scalar::Positive.validate("5"), Ok(Value::Float(5.0)));
        assert_eq!(Scalar::Positive.validate("12abc"), Ok(Value::Float(12.0)));
        assert_eq!(
            Scalar::Positive.validate("0"),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(
            Scalar::Positive.validate("abc"),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(Scalar::Negative.validate("-0.5"), Ok(Value::Float(-0.5)));
        assert_eq!(
            Scalar::Negative.validate("3"),
            Err(ValidationError::NotNegative)
        );
    }

    #[test]
    fn test_array_keeps_strings() {
        assert_eq!(
            validate_array("1, 2, 3", Some(Scalar::Int)),
            Ok(Value::Array(strings(&["1", "2", "3"])))
        );
        assert_eq!(
            validate_array("1, a, 3", Some(Scalar::Int)),
            Err(ValidationError::ArrayItem)
        );
        assert_eq!(
            validate_array(" a ,b", None),
            Ok(Value::Array(strings(&["a", "b"])))
        );
    }

    #[test]
    fn test_tuple_arity_and_items() {
        let types = [Scalar::Int, Scalar::Str];
        assert_eq!(
            validate_tuple("5,hello", &types),
            Ok(Value::Tuple(strings(&["5", "hello"])))
        );
        assert_eq!(
            validate_tuple("5,hello,extra", &types),
            Err(ValidationError::TupleLength(2))
        );
        assert_eq!(
            validate_tuple("x,hello", &types),
            Err(ValidationError::TupleItem(0))
        );
        assert_eq!(
            ValidationError::TupleLength(2).to_string(),
            "Invalid tuple. Expected a tuple of length 2."
        );
    }

    #[test]
    fn test_enum_lists_options() {
        let options = strings(&["red", "green", "blue"]);
        assert_eq!(
            validate_enum("green", &options),
            Ok(Value::Str("green".into()))
        );
        let err = validate_enum("purple", &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid option. Valid options are: red, green, blue."
        );
    }

    #[test]
    fn test_regex_searches_trimmed_input() {
        let pattern = Regex::new(r"^[A-Z]{3}-\d+$").unwrap();
        assert!(validate_regex(" ABC-12 ", &pattern).is_ok());
        assert_eq!(
            validate_regex("abc-12", &pattern),
            Err(ValidationError::PatternMismatch)
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        for scalar in Scalar::ALL {
            assert_eq!(scalar.validate("42"), scalar.validate("42"));
        }
    }

    #[test]
    fn test_scalar_names_round_trip() {
        for scalar in Scalar::ALL {
            assert_eq!(scalar.name().parse::<Scalar>(), Ok(scalar));
        }
        assert!("hexcolor".parse::<Scalar>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_value_serializes_untagged() {
        let json = |v: Value| serde_json::to_string(&v).unwrap();
        assert_eq!(json(Value::Int(8)), "8");
        assert_eq!(json(Value::Str("x".into())), "\"x\"");
        assert_eq!(
            json(Value::Array(vec!["a".into(), "b".into()])),
            "[\"a\",\"b\"]"
        );
    }
}
