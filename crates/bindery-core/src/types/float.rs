use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

// Float32 / Float64
//
// Finite values only; -0.0 canonically stored as 0.0 so Eq/Hash/Ord are
// consistent across the whole value union.
macro_rules! finite_float {
    ($name:ident, $inner:ty, $write:ident) => {
        ///
        /// Finite-only float wrapper; -0.0 canonicalized to 0.0.
        ///

        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, Display, Serialize)]
        pub struct $name($inner);

        impl $name {
            /// Fallible constructor that rejects non-finite values and
            /// normalizes -0.0.
            #[must_use]
            pub fn try_new(v: $inner) -> Option<Self> {
                if !v.is_finite() {
                    return None;
                }

                Some(Self(if v == 0.0 { 0.0 } else { v }))
            }

            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl Eq for $name {}

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.$write(self.0.to_bits());
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                // safe: no NaN, -0 normalized
                self.0.partial_cmp(&other.0).unwrap()
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl TryFrom<$inner> for $name {
            type Error = ();

            fn try_from(v: $inner) -> Result<Self, Self::Error> {
                Self::try_new(v).ok_or(())
            }
        }

        impl From<$name> for $inner {
            fn from(x: $name) -> Self {
                x.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <$inner>::deserialize(deserializer)?;
                Self::try_new(raw)
                    .ok_or_else(|| serde::de::Error::custom("non-finite float payload"))
            }
        }
    };
}

finite_float!(Float32, f32, write_u32);
finite_float!(Float64, f64, write_u64);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert!(Float64::try_new(f64::NAN).is_none());
        assert!(Float64::try_new(f64::INFINITY).is_none());
        assert!(Float32::try_new(f32::NEG_INFINITY).is_none());
    }

    #[test]
    fn negative_zero_canonicalized() {
        let a = Float64::try_new(-0.0).unwrap();
        let b = Float64::try_new(0.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get().to_bits(), b.get().to_bits());
    }

    #[test]
    fn ordering_is_total_over_finite_values() {
        let lo = Float32::try_new(-1.5).unwrap();
        let hi = Float32::try_new(2.25).unwrap();
        assert!(lo < hi);
        assert_eq!(lo.cmp(&lo), Ordering::Equal);
    }
}
