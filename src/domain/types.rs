//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! email, trimmed non-empty text) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Smallest valid identifier.
            pub const FIRST: Self = Self(1);

            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Identifier following this one.
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(PlaceId, "Unique identifier for a place.");
id_newtype!(TripId, "Unique identifier for a trip.");
id_newtype!(MomentId, "Unique identifier for a trip moment.");
id_newtype!(DiaryEntryId, "Unique identifier for a diary entry.");
id_newtype!(ParticipantId, "Unique identifier for a trip participant.");
id_newtype!(ReviewId, "Unique identifier for a place review.");

/// Returns the identifier after the largest one in `ids`, or `first` when empty.
pub fn next_id<I, T>(ids: I, first: T, next: impl Fn(T) -> T) -> T
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    ids.into_iter().max().map(next).unwrap_or(first)
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for UserEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for UserEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(PlaceName, "Place name wrapper enforcing non-empty values.");
non_empty_string_newtype!(TripTitle, "Trip title wrapper enforcing non-empty values.");
non_empty_string_newtype!(UserName, "Display name of the signed-in user.");

/// User-authored text with markup stripped down to a safe subset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SanitizedText(String);

impl SanitizedText {
    /// Sanitizes, trims and rejects empty values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let inner = NonEmptyString::new(sanitized)?;
        Ok(Self(inner.into_inner()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SanitizedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL-friendly place key derived from its name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlaceSlug(String);

impl PlaceSlug {
    /// Lower-cases the name and joins its words with `-`.
    pub fn from_name(name: &PlaceName) -> Self {
        let slug = name
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlaceSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(PlaceId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(TripId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(MomentId::new(7).map(MomentId::get), Ok(7));
    }

    #[test]
    fn next_id_follows_maximum() {
        let ids = [PlaceId(3), PlaceId(9), PlaceId(1)];
        assert_eq!(next_id(ids, PlaceId(1), PlaceId::next), PlaceId(10));
        assert_eq!(
            next_id(Vec::<PlaceId>::new(), PlaceId(1), PlaceId::next),
            PlaceId(1)
        );
    }

    #[test]
    fn email_is_normalized() {
        let email = UserEmail::new("  Traveler@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "traveler@example.com");
        assert_eq!(
            UserEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn blank_names_rejected() {
        assert_eq!(PlaceName::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(TripTitle::new(" Alps ").unwrap().as_str(), "Alps");
    }

    #[test]
    fn sanitized_text_strips_scripts() {
        let text = SanitizedText::new("Great view<script>alert(1)</script>").unwrap();
        assert_eq!(text.as_str(), "Great view");
        assert!(SanitizedText::new("<script>x</script>").is_err());
    }

    #[test]
    fn slug_joins_words() {
        let name = PlaceName::new("Old  Town Square").unwrap();
        assert_eq!(PlaceSlug::from_name(&name).as_str(), "old-town-square");
    }
}
