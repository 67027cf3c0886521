use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;
use time::OffsetDateTime;

/// IEX marks symbols it has not quoted during the trading day with this value.
const NOT_QUOTED: i64 = -1;

/// Point in time transmitted by IEX Cloud as milliseconds since the Unix epoch.
///
/// Decoding keeps whole seconds only. `null` and the `-1` "not quoted"
/// sentinel both decode to [`EpochTime::ZERO`], and any moment before the
/// epoch (including `ZERO`) encodes back to `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochTime(OffsetDateTime);

impl EpochTime {
    /// The "no value" timestamp, 0001-01-01T00:00:00Z.
    pub const ZERO: Self = Self(datetime!(0001-01-01 0:00 UTC));

    /// Builds a value from epoch milliseconds using the wire decoding rules.
    pub fn from_unix_millis(millis: i64) -> Result<Self, time::error::ComponentRange> {
        if millis == NOT_QUOTED {
            return Ok(Self::ZERO);
        }

        OffsetDateTime::from_unix_timestamp(millis / 1000).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Self::ZERO.0
    }

    pub const fn as_offset_datetime(&self) -> OffsetDateTime {
        self.0
    }

    /// Milliseconds since the Unix epoch. Negative for pre-epoch moments.
    pub fn unix_millis(&self) -> i64 {
        let millis = self.0.unix_timestamp_nanos() / 1_000_000;
        i64::try_from(millis).unwrap_or(i64::MIN)
    }
}

impl Default for EpochTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<OffsetDateTime> for EpochTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl From<EpochTime> for OffsetDateTime {
    fn from(value: EpochTime) -> Self {
        value.0
    }
}

impl Display for EpochTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for EpochTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = self.unix_millis();
        if millis < 0 {
            return serializer.serialize_none();
        }

        serializer.serialize_i64(millis)
    }
}

impl<'de> Deserialize<'de> for EpochTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(Self::ZERO),
            Some(millis) => Self::from_unix_millis(millis).map_err(D::Error::custom),
        }
    }
}
