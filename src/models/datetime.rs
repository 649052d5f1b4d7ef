//! Shared date-time handling for the domain models.
//!
//! All date-times in the application, both over the wire and in the
//! database, use the same ISO-8601 representation with second precision and
//! no UTC offset, e.g. `2024-01-01T00:00:00`.

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// The format used for all date-times.
pub const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// The current UTC date-time, truncated to second precision so that it
/// round-trips through [FORMAT] unchanged.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc()
        .replace_nanosecond(0)
        .expect("zero is a valid nanosecond");

    PrimitiveDateTime::new(now.date(), now.time())
}

/// The later of `updated_at` and the current time.
///
/// Used by the entity update methods to keep `updated_at` monotonically
/// non-decreasing.
pub fn advance(updated_at: PrimitiveDateTime) -> PrimitiveDateTime {
    now().max(updated_at)
}

/// Render `datetime` using [FORMAT].
pub fn format(datetime: PrimitiveDateTime) -> String {
    datetime
        .format(FORMAT)
        .expect("the date-time format requires no UTC offset")
}

/// Parse a date-time string in [FORMAT].
pub fn parse(text: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(text, FORMAT)
}

/// Serde support for date-time fields, for use with `#[serde(with = "datetime::iso")]`.
pub mod iso {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::PrimitiveDateTime;

    /// Serialize `datetime` as a string in [super::FORMAT].
    pub fn serialize<S>(datetime: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(*datetime))
    }

    /// Deserialize a date-time from a string in [super::FORMAT].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse(&text).map_err(D::Error::custom)
    }

    /// Serde support for optional date-time fields, for use with
    /// `#[serde(with = "datetime::iso::option")]`.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
        use time::PrimitiveDateTime;

        /// Serialize `datetime` as a string in the shared format, or as null.
        pub fn serialize<S>(
            datetime: &Option<PrimitiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match datetime {
                Some(datetime) => serializer.serialize_some(&super::super::format(*datetime)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize an optional date-time from a string or null.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let text: Option<String> = Option::deserialize(deserializer)?;

            text.map(|text| super::super::parse(&text).map_err(D::Error::custom))
                .transpose()
        }
    }
}
