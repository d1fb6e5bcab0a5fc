//! Range-checked conversion of parsed numbers into concrete numeric types.

use crate::DecodeError;
use crate::tree::kind_name;
use toml::Value;

/// A number as produced by the TOML parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Numeric view of a node, if it holds one.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(Self::Integer(*n)),
            Value::Float(n) => Some(Self::Float(*n)),
            _ => None,
        }
    }

    fn kind(self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
        }
    }
}

/// Numeric leaf types a parsed number can be narrowed into.
pub trait Coerce: Sized {
    /// Type name used in diagnostics.
    const TARGET: &'static str;

    /// Convert, failing with `Overflow` when the value does not fit and
    /// `TypeMismatch` when integer and float kinds are crossed.
    fn coerce(source: Number) -> Result<Self, DecodeError>;

    /// Convert a node, requiring it to hold a number.
    fn coerce_value(value: &Value) -> Result<Self, DecodeError> {
        match Number::from_value(value) {
            Some(number) => Self::coerce(number),
            None => Err(DecodeError::type_mismatch(Self::TARGET, kind_name(value))),
        }
    }
}

macro_rules! coerce_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn coerce(source: Number) -> Result<Self, DecodeError> {
                    match source {
                        Number::Integer(n) => <$ty>::try_from(n)
                            .map_err(|_| DecodeError::overflow(Self::TARGET, n)),
                        other => Err(DecodeError::type_mismatch(Self::TARGET, other.kind())),
                    }
                }
            }
        )*
    };
}

coerce_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Coerce for f32 {
    const TARGET: &'static str = "f32";

    fn coerce(source: Number) -> Result<Self, DecodeError> {
        match source {
            Number::Float(n) if n.is_finite() && n.abs() > f64::from(f32::MAX) => {
                Err(DecodeError::overflow(Self::TARGET, n))
            }
            Number::Float(n) => Ok(n as f32),
            other => Err(DecodeError::type_mismatch(Self::TARGET, other.kind())),
        }
    }
}

impl Coerce for f64 {
    const TARGET: &'static str = "f64";

    fn coerce(source: Number) -> Result<Self, DecodeError> {
        match source {
            Number::Float(n) => Ok(n),
            other => Err(DecodeError::type_mismatch(Self::TARGET, other.kind())),
        }
    }
}
