//! Leaf conversions: strings, booleans, numbers and timestamps.

use super::{FromTree, Shape};
use crate::DecodeError;
use crate::coerce::Coerce;
use crate::tree::{datetime_kind, kind_name};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use toml::Value;
use toml::value::{Datetime, Offset};

macro_rules! numeric_from_tree {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromTree for $ty {
                const SHAPE: Shape = Shape::Scalar;

                fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
                    <$ty as Coerce>::coerce_value(node)
                }
            }
        )*
    };
}

numeric_from_tree!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl FromTree for String {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        match node {
            Value::String(value) => Ok(value.clone()),
            other => Err(DecodeError::type_mismatch("string", kind_name(other))),
        }
    }
}

impl FromTree for bool {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        match node {
            Value::Boolean(value) => Ok(*value),
            other => Err(DecodeError::type_mismatch("boolean", kind_name(other))),
        }
    }
}

/// Untyped passthrough, for heterogeneous data.
impl FromTree for Value {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        Ok(node.clone())
    }
}

impl FromTree for Datetime {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        datetime(node, "datetime")
    }
}

impl FromTree for DateTime<FixedOffset> {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        const EXPECTED: &str = "offset datetime";
        let value = datetime(node, EXPECTED)?;
        let (Some(date), Some(time), Some(offset)) =
            (naive_date(&value), naive_time(&value), fixed_offset(&value))
        else {
            return Err(datetime_mismatch(EXPECTED, &value));
        };
        offset
            .from_local_datetime(&NaiveDateTime::new(date, time))
            .single()
            .ok_or_else(|| datetime_mismatch(EXPECTED, &value))
    }
}

impl FromTree for DateTime<Utc> {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError> {
        DateTime::<FixedOffset>::from_node(node, env).map(|value| value.with_timezone(&Utc))
    }
}

impl FromTree for NaiveDateTime {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        const EXPECTED: &str = "local datetime";
        let value = datetime(node, EXPECTED)?;
        match (naive_date(&value), naive_time(&value), value.offset) {
            (Some(date), Some(time), None) => Ok(NaiveDateTime::new(date, time)),
            _ => Err(datetime_mismatch(EXPECTED, &value)),
        }
    }
}

impl FromTree for NaiveDate {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        const EXPECTED: &str = "local date";
        let value = datetime(node, EXPECTED)?;
        match (naive_date(&value), value.time) {
            (Some(date), None) => Ok(date),
            _ => Err(datetime_mismatch(EXPECTED, &value)),
        }
    }
}

impl FromTree for NaiveTime {
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Value, _env: &str) -> Result<Self, DecodeError> {
        const EXPECTED: &str = "local time";
        let value = datetime(node, EXPECTED)?;
        match (value.date, naive_time(&value)) {
            (None, Some(time)) => Ok(time),
            _ => Err(datetime_mismatch(EXPECTED, &value)),
        }
    }
}

fn datetime(node: &Value, expected: &str) -> Result<Datetime, DecodeError> {
    match node {
        Value::Datetime(value) => Ok(*value),
        other => Err(DecodeError::type_mismatch(expected, kind_name(other))),
    }
}

/// Mismatch naming both the sub-kind and the literal, e.g. `local time 23:59:61`.
fn datetime_mismatch(expected: &str, value: &Datetime) -> DecodeError {
    DecodeError::type_mismatch(expected, format!("{} {value}", datetime_kind(value)))
}

fn naive_date(value: &Datetime) -> Option<NaiveDate> {
    let date = value.date?;
    NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )
}

fn naive_time(value: &Datetime) -> Option<NaiveTime> {
    let time = value.time?;
    // chrono spells a leap second as second 59 with an extra second of nanos.
    let (second, nanosecond) = match time.second {
        60 => (59, time.nanosecond.checked_add(1_000_000_000)?),
        second => (u32::from(second), time.nanosecond),
    };
    NaiveTime::from_hms_nano_opt(
        u32::from(time.hour),
        u32::from(time.minute),
        second,
        nanosecond,
    )
}

fn fixed_offset(value: &Datetime) -> Option<FixedOffset> {
    match value.offset? {
        Offset::Z => FixedOffset::east_opt(0),
        Offset::Custom { minutes } => FixedOffset::east_opt(i32::from(minutes) * 60),
    }
}
