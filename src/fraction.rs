use crate::big_int::BigInt;
use crate::big_rational::BigRational;
use num_traits::Zero;
use serde::Serialize;
use serde::{de, Deserialize, Deserializer};

/// Two-field rational form with stringified numerator and denominator,
/// meant for JSON payloads a person can read and edit directly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Fraction {
    /// Numerator
    numer: BigInt,
    /// Denominator
    denom: BigInt,
}

impl Fraction {
    /// Numerator
    pub fn numer(&self) -> &BigInt { &self.numer }

    /// Denominator
    pub fn denom(&self) -> &BigInt { &self.denom }
}

impl From<BigRational> for Fraction {
    fn from(ratio: BigRational) -> Fraction {
        Fraction {
            numer: ratio.numer().clone(),
            denom: ratio.denom().clone(),
        }
    }
}

impl From<Fraction> for BigRational {
    // The denominator is non-zero by construction: `From<BigRational>` keeps
    // the canonical positive denominator and deserialization rejects zero.
    fn from(fraction: Fraction) -> Self { BigRational::new(fraction.numer, fraction.denom) }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct FractionHelper {
            numer: BigInt,
            denom: BigInt,
        }

        let maybe_fraction: FractionHelper = Deserialize::deserialize(deserializer)?;
        if maybe_fraction.denom.is_zero() {
            return Err(de::Error::custom("denominator must not be zero"));
        }

        Ok(Fraction {
            numer: maybe_fraction.numer,
            denom: maybe_fraction.denom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{self as json};

    #[test]
    fn test_fraction_serialize() {
        let fraction = Fraction::from(BigRational::new(2000, 3));
        let expected = r#"{"numer":"2000","denom":"3"}"#;
        assert_eq!(expected, json::to_string(&fraction).unwrap());
    }

    #[test]
    fn test_fraction_deserialize() {
        let num_str = r#"{"numer":"2000","denom":"3"}"#;
        let actual: Fraction = json::from_str(num_str).unwrap();
        assert_eq!(&BigInt::from(2000), actual.numer());
        assert_eq!(&BigInt::from(3), actual.denom());

        let num_str = r#"{"numer":"2000","denom":"0"}"#;
        let err = json::from_str::<Fraction>(num_str).unwrap_err();
        let expected_msg = "denominator must not be zero";
        assert_eq!(expected_msg, err.to_string());
    }

    #[test]
    fn test_fraction_reduces_into_rational() {
        let fraction: Fraction = json::from_str(r#"{"numer":"4","denom":"-6"}"#).unwrap();
        let ratio = BigRational::from(fraction);
        assert_eq!("-2/3", ratio.to_string());
    }

    #[test]
    fn test_fraction_from_rational_is_canonical() {
        let fraction = Fraction::from(BigRational::new(4, -6));
        assert_eq!(&BigInt::from(-2), fraction.numer());
        assert_eq!(&BigInt::from(3), fraction.denom());
    }
}
