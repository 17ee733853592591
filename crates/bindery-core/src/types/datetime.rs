use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{
    Date as TimeDate, Duration as TimeDuration, Month, PrimitiveDateTime, Time,
    format_description::FormatItem,
};

static DATE_FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
static DATE_AND_TIME_FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

///
/// DatePattern
///
/// The two accepted input patterns. Selection is by input length: any
/// 10-byte value is taken as date-only, everything else as date-and-time.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DatePattern {
    /// `yyyy-MM-dd`
    DateOnly,
    /// `yyyy-MM-dd HH:mm:ss`
    DateAndTime,
}

impl DatePattern {
    #[must_use]
    pub const fn for_input(raw: &str) -> Self {
        if raw.len() == 10 {
            Self::DateOnly
        } else {
            Self::DateAndTime
        }
    }

    /// Number of input bytes the pattern consumes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::DateOnly => 10,
            Self::DateAndTime => 19,
        }
    }

    fn items(self) -> &'static [FormatItem<'static>] {
        match self {
            Self::DateOnly => DATE_FORMAT.get_or_init(|| {
                time::format_description::parse("[year]-[month]-[day]").unwrap()
            }),
            Self::DateAndTime => DATE_AND_TIME_FORMAT.get_or_init(|| {
                time::format_description::parse(
                    "[year]-[month]-[day] [hour]:[minute]:[second]",
                )
                .unwrap()
            }),
        }
    }
}

///
/// DateTime
///
/// Seconds-precision point on the timeline, stored as an offset from the
/// Unix epoch.
///

#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct DateTime(i64);

impl DateTime {
    pub const EPOCH: Self = Self(0);

    const fn epoch_primitive() -> PrimitiveDateTime {
        // Safe: constant valid date
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => PrimitiveDateTime::new(d, Time::MIDNIGHT),
            Err(_) => unreachable!(),
        }
    }

    /// Build from calendar components; `None` for out-of-range input.
    #[must_use]
    pub fn new_checked(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> Option<Self> {
        let month = Month::try_from(mo).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;
        let time = Time::from_hms(h, mi, s).ok()?;
        Some(Self::from_primitive(PrimitiveDateTime::new(date, time)))
    }

    /// Parse `raw` with the given pattern, failing on malformed input.
    ///
    /// At most a pattern-length prefix is consumed; the legacy wire format
    /// may carry trailing characters the parser must ignore.
    pub fn parse(raw: &str, pattern: DatePattern) -> Result<Self, time::error::Parse> {
        let input = raw.get(..pattern.width()).unwrap_or(raw);
        let format = pattern.items();

        match pattern {
            DatePattern::DateOnly => {
                TimeDate::parse(input, format).map(|date| Self::from_primitive(date.midnight()))
            }
            DatePattern::DateAndTime => {
                PrimitiveDateTime::parse(input, format).map(Self::from_primitive)
            }
        }
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    fn from_primitive(dt: PrimitiveDateTime) -> Self {
        let delta = dt - Self::epoch_primitive();
        Self(delta.whole_seconds())
    }

    fn to_primitive(self) -> PrimitiveDateTime {
        let delta = TimeDuration::seconds(self.0);
        Self::epoch_primitive().checked_add(delta).unwrap_or({
            if self.0 >= 0 {
                PrimitiveDateTime::MAX
            } else {
                PrimitiveDateTime::MIN
            }
        })
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({self})")
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.to_primitive();
        let month: u8 = dt.month().into();
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            dt.year(),
            month,
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s, DatePattern::for_input(&s))
            .map_err(|err| serde::de::Error::custom(format!("invalid datetime `{s}`: {err}")))
    }
}

///
/// TESTS
///
