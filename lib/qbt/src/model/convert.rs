//! Field-level decoding rules shared by the typed models.
//!
//! The wire encodes timestamps as epoch seconds, durations as second or
//! minute counts, and uses `-1` (sometimes its unsigned 32-bit mirror) for
//! "no value". These helpers are wired into the models with
//! `#[serde(deserialize_with = ...)]`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// `-1` as an unsigned 32-bit value, emitted by some server versions.
const NEGATIVE_ONE_U32: i64 = 0xFFFF_FFFF;

/// Epoch seconds to a timestamp; `-1` and `0xFFFF_FFFF` mean absent.
pub(crate) fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = i64::deserialize(deserializer)?;
    if secs == -1 || secs == NEGATIVE_ONE_U32 {
        return Ok(None);
    }

    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(stamp) => Ok(Some(stamp)),
        None => Err(serde::de::Error::custom(format!(
            "timestamp out of range: {secs}"
        ))),
    }
}

/// Second count to a [`Duration`]; negative values clamp to zero.
pub(crate) fn duration_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = i64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs.max(0).unsigned_abs()))
}

/// Minute count to a [`Duration`]; `-1` means absent.
pub(crate) fn optional_duration_mins<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let mins = i64::deserialize(deserializer)?;
    if mins < 0 {
        return Ok(None);
    }
    Ok(Some(Duration::from_secs(mins.unsigned_abs() * 60)))
}

/// Comma-joined tag string to a list; the empty string is an empty list.
pub(crate) fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let joined = String::deserialize(deserializer)?;
    if joined.is_empty() {
        return Ok(Vec::new());
    }
    Ok(joined.split(',').map(|s| s.trim().to_owned()).collect())
}

/// RFC 2822 date string to a timestamp (RSS article dates).
pub(crate) fn optional_rfc2822<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    match text {
        None => Ok(None),
        Some(text) => DateTime::parse_from_rfc2822(&text)
            .map(|stamp| Some(stamp.with_timezone(&Utc)))
            .map_err(|e| serde::de::Error::custom(format!("bad RFC 2822 date {text:?}: {e}"))),
    }
}

/// Defines an enumeration stored as an integer on the wire.
///
/// The reverse lookup is exhaustive: an integer outside the table is a
/// decode error, which `from_json` surfaces as a mapper failure.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            /// The wire integer for this member.
            #[must_use]
            $vis const fn as_i64(self) -> i64 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = i64;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = i64::deserialize(deserializer)?;
                Self::try_from(value).map_err(|other| {
                    serde::de::Error::custom(format!(
                        concat!("unknown ", stringify!($name), " value: {}"),
                        other
                    ))
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i64(self.as_i64())
            }
        }
    };
}

pub(crate) use int_enum;

#[cfg(test)]
mod tests {
    use serde::de::IntoDeserializer;
    use serde::de::value::{Error as DeError, I64Deserializer, StrDeserializer};

    use super::*;

    fn int(value: i64) -> I64Deserializer<DeError> {
        value.into_deserializer()
    }

    fn text(value: &str) -> StrDeserializer<'_, DeError> {
        value.into_deserializer()
    }

    #[test]
    fn timestamps_map_sentinels_to_none() {
        assert_eq!(optional_timestamp(int(-1)).expect("decode"), None);
        assert_eq!(
            optional_timestamp(int(0xFFFF_FFFF)).expect("decode"),
            None
        );

        let stamp = optional_timestamp(int(1_666_000_000))
            .expect("decode")
            .expect("present");
        assert_eq!(stamp.timestamp(), 1_666_000_000);
    }

    #[test]
    fn durations_decode_with_units() {
        assert_eq!(
            duration_secs(int(120)).expect("decode"),
            Duration::from_secs(120)
        );
        assert_eq!(duration_secs(int(-5)).expect("decode"), Duration::ZERO);

        assert_eq!(
            optional_duration_mins(int(30)).expect("decode"),
            Some(Duration::from_secs(1800))
        );
        assert_eq!(optional_duration_mins(int(-1)).expect("decode"), None);
    }

    #[test]
    fn tags_split_on_commas() {
        assert_eq!(
            comma_list(text("linux, iso,weekly")).expect("decode"),
            ["linux", "iso", "weekly"]
        );
        assert_eq!(comma_list(text("")).expect("decode"), Vec::<String>::new());
    }

    #[test]
    fn rfc2822_dates() {
        let stamp = optional_rfc2822(text("Wed, 07 Dec 2022 01:34:44 +0000"))
            .expect("decode")
            .expect("present");
        assert_eq!(stamp.timestamp(), 1_670_376_884);

        assert!(optional_rfc2822(text("not a date")).is_err());
    }
}
