//! Wire formats for meal dates and times: ISO 8601 calendar dates
//! (`2025-08-07`) and times of day with optional seconds (`20:20`,
//! `20:20:15`). Times always serialize with seconds.

use time::{format_description::FormatItem, macros::format_description, Date, Time};

const DATE_FMT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_HM_FMT: &[FormatItem<'static>] = format_description!("[hour]:[minute]");
const TIME_HMS_FMT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

pub mod iso_date {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(DATE_FMT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, DATE_FMT).map_err(de::Error::custom)
    }
}

pub mod iso_time {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::Time;

    use super::{TIME_HMS_FMT, TIME_HM_FMT};

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        let text = time.format(TIME_HMS_FMT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let text = String::deserialize(deserializer)?;
        Time::parse(&text, TIME_HMS_FMT)
            .or_else(|_| Time::parse(&text, TIME_HM_FMT))
            .map_err(de::Error::custom)
    }
}
