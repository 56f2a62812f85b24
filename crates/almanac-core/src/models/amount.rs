//! Offset amounts accepted by the offset calculator.

/// A signed offset count.
///
/// Integer inputs are carried exactly. Floating-point inputs are accepted so that
/// non-finite values can be rejected at the validation layer; finite fractional
/// values are truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Whole(i64),
    Fractional(f64),
}

impl Amount {
    /// False for NaN and the infinities.
    pub fn is_finite(self) -> bool {
        match self {
            Amount::Whole(_) => true,
            Amount::Fractional(v) => v.is_finite(),
        }
    }

    /// The amount truncated toward zero.
    ///
    /// `None` when the value is non-finite or does not fit in an `i64`.
    pub fn truncated(self) -> Option<i64> {
        match self {
            Amount::Whole(n) => Some(n),
            Amount::Fractional(v) if !v.is_finite() => None,
            Amount::Fractional(v) => {
                let t = v.trunc();
                // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
                if t >= i64::MIN as f64 && t < i64::MAX as f64 {
                    Some(t as i64)
                } else {
                    None
                }
            }
        }
    }
}

macro_rules! whole_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Amount {
            fn from(n: $t) -> Self {
                Amount::Whole(i64::from(n))
            }
        })*
    };
}

whole_from!(i8, i16, i32, u8, u16, u32);

impl From<i64> for Amount {
    fn from(n: i64) -> Self {
        Amount::Whole(n)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Amount::Fractional(v)
    }
}

impl From<f32> for Amount {
    fn from(v: f32) -> Self {
        Amount::Fractional(f64::from(v))
    }
}
