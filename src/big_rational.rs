//! Exact rational number kept in canonical form: positive denominator,
//! numerator and denominator coprime, zero represented as `0/1`.
//!
//! Besides exact arithmetic the type converts to and from `f64` without loss
//! where IEEE-754 permits, renders banker's-rounded fixed-precision decimals,
//! and renders exact decimals with the repeating block in parentheses.

use crate::big_int::{BigInt, Sign};
use crate::big_uint::{BigUint, DIGIT_BITS, TEN};
use crate::error::{DivideByZeroError, NonFiniteError, ParseRationalError};
use crate::fraction::Fraction;
use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

const MANT_DIG: i64 = f64::MANTISSA_DIGITS as i64;
const MIN_EXP: i64 = f64::MIN_EXP as i64;

/// Exact ratio of two [`BigInt`]s in canonical form.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigRational {
    numer: BigInt,
    denom: BigInt,
}

impl BigRational {
    /// Builds `numer / denom` in canonical form.
    ///
    /// Panics on a zero denominator; [`BigRational::checked_new`] is the
    /// non-panicking variant.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> BigRational {
        match BigRational::checked_new(numer, denom) {
            Ok(w) => w,
            Err(_) => panic!("division by zero"),
        }
    }

    /// Builds `numer / denom`, or an error when the denominator is zero.
    pub fn checked_new(
        numer: impl Into<BigInt>,
        denom: impl Into<BigInt>,
    ) -> Result<BigRational, DivideByZeroError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(DivideByZeroError);
        }
        let mut w = BigRational {
            numer: numer.into(),
            denom,
        };
        w.reduce();
        Ok(w)
    }

    /// Numerator of the canonical form.
    pub fn numer(&self) -> &BigInt { &self.numer }

    /// Denominator of the canonical form; always positive.
    pub fn denom(&self) -> &BigInt { &self.denom }

    pub fn signum(&self) -> i32 { self.numer.signum() }

    pub fn abs(&self) -> BigRational {
        BigRational {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    // Restores the canonical form. The denominator is non-zero by
    // construction everywhere this is called.
    fn reduce(&mut self) {
        if self.denom.sign() == Sign::Minus {
            self.numer = -self.numer.clone();
            self.denom = -self.denom.clone();
        }
        let g = BigInt::from(self.numer.magnitude().gcd(self.denom.magnitude()));
        self.numer /= &g;
        self.denom /= &g;
    }

    /// `self / rhs`, or an error when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigRational) -> Result<BigRational, DivideByZeroError> {
        if rhs.is_zero() {
            return Err(DivideByZeroError);
        }
        let mut w = self.clone();
        w.numer *= &rhs.denom;
        w.denom *= &rhs.numer;
        w.reduce();
        Ok(w)
    }

    /// Converts a finite `f64` to the exactly equal rational.
    ///
    /// Every finite double is a dyadic rational, so the conversion is exact;
    /// NaN and infinities are range errors. The canonical zero has no sign,
    /// so `-0.0` converts to plain zero and comes back from [`to_f64`] as
    /// `+0.0` (numerically equal, different bit pattern).
    ///
    /// [`to_f64`]: BigRational::to_f64
    pub fn from_f64(x: f64) -> Result<BigRational, NonFiniteError> {
        if !x.is_finite() {
            return Err(NonFiniteError(x));
        }
        let bits = x.to_bits();
        let negative = bits >> 63 == 1;
        let biased_exp = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & 0x000f_ffff_ffff_ffff;
        // Integer mantissa and power-of-two exponent; the subnormal range has
        // no implicit leading bit.
        let (mantissa, exponent) = if biased_exp == 0 {
            (frac, -1074)
        } else {
            (frac | (1 << 52), biased_exp - 1075)
        };
        let mut numer = BigInt::from(BigUint::from(mantissa));
        let mut denom = BigInt::one();
        if exponent >= 0 {
            numer <<= exponent as usize;
        } else {
            denom <<= (-exponent) as usize;
        }
        if negative {
            numer = -numer;
        }
        let mut w = BigRational { numer, denom };
        w.reduce();
        Ok(w)
    }

    /// Nearest `f64`, rounding half to even; values beyond the double range
    /// become infinite, values below it flush to zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let mut n = self.numer.magnitude().clone();
        let mut d = self.denom.magnitude().clone();

        // Scale so that 1/4 < n/d < 1, remembering the binary exponent.
        let mut exponent = n.bits() as i64 - d.bits() as i64 + 1;
        if exponent > 0 {
            d <<= exponent as usize;
        } else {
            n <<= (-exponent) as usize;
        }
        if (n.clone() << 1) < d {
            n <<= 1;
            exponent -= 1;
        }

        // Mantissa width, shortened in the subnormal range.
        let mut bits = MANT_DIG;
        if exponent < MIN_EXP {
            bits -= MIN_EXP - exponent;
            if bits < 0 {
                bits = 0;
            }
        }
        n <<= bits as usize;
        exponent -= bits;

        let (mut q, r) = n.div_rem(&d);
        round_half_even(&mut q, &r, &d);

        // The mantissa spans at most two digits; reassemble and scale.
        let high = (q.clone() >> DIGIT_BITS as usize).low_u32();
        let low = q.low_u32();
        let value = ldexp(
            ldexp(f64::from(high), i64::from(DIGIT_BITS)) + f64::from(low),
            exponent,
        );
        if self.numer.sign() == Sign::Minus {
            -value
        } else {
            value
        }
    }

    /// Rounds to `digits` decimal places, half to even, as a rational over
    /// `10^digits`.
    pub fn round(&self, digits: u32) -> BigRational {
        let scale = TEN.pow(digits);
        let scaled = self.numer.magnitude() * &scale;
        let (mut q, r) = scaled.div_rem(self.denom.magnitude());
        round_half_even(&mut q, &r, self.denom.magnitude());
        let mut numer = BigInt::from(q);
        if self.numer.sign() == Sign::Minus {
            numer = -numer;
        }
        let mut w = BigRational {
            numer,
            denom: BigInt::from(scale),
        };
        w.reduce();
        w
    }

    /// Decimal rendering rounded to at most `digits` fraction digits, without
    /// trailing-zero padding: `22/7 → "3.1429"`, `1/4 → "0.25"`.
    pub fn to_decimal(&self, digits: u32) -> String {
        let rounded = self.round(digits);
        let mut out = String::new();
        if rounded.numer.sign() == Sign::Minus {
            out.push('-');
        }
        let d = rounded.denom.magnitude();
        let (q, mut r) = rounded.numer.magnitude().div_rem(d);
        out.push_str(&q.to_string());
        if !r.is_zero() {
            out.push('.');
            for _ in 0..digits {
                if r.is_zero() {
                    break;
                }
                r.mul_add_assign(10, 0);
                let (digit, rest) = r.div_rem(d);
                out.push(char::from(b'0' + digit.low_u32() as u8));
                r = rest;
            }
        }
        out
    }

    /// Exact decimal rendering with the repeating block in parentheses:
    /// `1/7 → "0.(142857)"`, `1/6 → "0.1(6)"`, `1/4 → "0.25"`.
    pub fn to_exact_decimal(&self) -> String {
        let mut out = String::new();
        if self.numer.sign() == Sign::Minus {
            out.push('-');
        }
        let d = self.denom.magnitude();
        let (q, mut r) = self.numer.magnitude().div_rem(d);
        out.push_str(&q.to_string());
        if r.is_zero() {
            return out;
        }
        out.push('.');
        // Long division, one digit per step. The remainder determines every
        // later digit, so the first repeated remainder closes the period.
        let mut seen: HashMap<BigUint, usize> = HashMap::new();
        loop {
            if r.is_zero() {
                return out;
            }
            if let Some(&pos) = seen.get(&r) {
                out.insert(pos, '(');
                out.push(')');
                return out;
            }
            seen.insert(r.clone(), out.len());
            r.mul_add_assign(10, 0);
            let (digit, rest) = r.div_rem(d);
            out.push(char::from(b'0' + digit.low_u32() as u8));
            r = rest;
        }
    }
}

// Rounds the quotient up when the remainder is above one half of the
// divisor, and to even on an exact tie.
fn round_half_even(q: &mut BigUint, r: &BigUint, d: &BigUint) {
    let r2 = r.clone() << 1;
    match r2.cmp(d) {
        Ordering::Greater => *q += 1u32,
        Ordering::Equal => {
            if q.low_u32() & 1 == 1 {
                *q += 1u32;
            }
        }
        Ordering::Less => {}
    }
}

// musl-style scalbn: x * 2^n with overflow to infinity and gradual
// underflow, applying the exponent in bounded power-of-two factors.
fn ldexp(x: f64, exp: i64) -> f64 {
    let mut y = x;
    let mut n = exp;
    if n > 1023 {
        y *= f64::from_bits(0x7fe << 52); // 2^1023
        n -= 1023;
        if n > 1023 {
            y *= f64::from_bits(0x7fe << 52);
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        let scale = f64::from_bits(0x001 << 52) * f64::from_bits(0x434 << 52); // 2^-1022 * 2^53
        y *= scale;
        n += 1022 - 53;
        if n < -1022 {
            y *= scale;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * f64::from_bits(((0x3ff + n) as u64) << 52)
}

impl Default for BigRational {
    fn default() -> BigRational { BigRational::zero() }
}

impl Zero for BigRational {
    fn zero() -> BigRational {
        BigRational {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool { self.numer.is_zero() }
}

impl One for BigRational {
    fn one() -> BigRational {
        BigRational {
            numer: BigInt::one(),
            denom: BigInt::one(),
        }
    }
}

impl From<BigInt> for BigRational {
    fn from(numer: BigInt) -> BigRational {
        BigRational {
            numer,
            denom: BigInt::one(),
        }
    }
}

impl From<BigUint> for BigRational {
    fn from(numer: BigUint) -> BigRational { BigInt::from(numer).into() }
}

impl From<i32> for BigRational {
    fn from(numer: i32) -> BigRational { BigInt::from(numer).into() }
}

impl From<u32> for BigRational {
    fn from(numer: u32) -> BigRational { BigInt::from(numer).into() }
}

impl From<i64> for BigRational {
    fn from(numer: i64) -> BigRational { BigInt::from(numer).into() }
}

impl From<u64> for BigRational {
    fn from(numer: u64) -> BigRational { BigInt::from(numer).into() }
}

impl TryFrom<f64> for BigRational {
    type Error = NonFiniteError;

    fn try_from(x: f64) -> Result<BigRational, NonFiniteError> { BigRational::from_f64(x) }
}

impl Ord for BigRational {
    fn cmp(&self, other: &BigRational) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        (&self.numer * &other.denom).cmp(&(&self.denom * &other.numer))
    }
}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &BigRational) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Neg for BigRational {
    type Output = BigRational;

    fn neg(mut self) -> BigRational {
        self.numer = -self.numer;
        self
    }
}

impl Neg for &BigRational {
    type Output = BigRational;

    fn neg(self) -> BigRational { -self.clone() }
}

impl AddAssign<&BigRational> for BigRational {
    fn add_assign(&mut self, rhs: &BigRational) {
        self.numer *= &rhs.denom;
        let cross = &self.denom * &rhs.numer;
        self.numer += &cross;
        self.denom *= &rhs.denom;
        self.reduce();
    }
}

impl AddAssign<BigRational> for BigRational {
    fn add_assign(&mut self, rhs: BigRational) { *self += &rhs }
}

impl SubAssign<&BigRational> for BigRational {
    fn sub_assign(&mut self, rhs: &BigRational) {
        self.numer *= &rhs.denom;
        let cross = &self.denom * &rhs.numer;
        self.numer -= &cross;
        self.denom *= &rhs.denom;
        self.reduce();
    }
}

impl SubAssign<BigRational> for BigRational {
    fn sub_assign(&mut self, rhs: BigRational) { *self -= &rhs }
}

impl MulAssign<&BigRational> for BigRational {
    fn mul_assign(&mut self, rhs: &BigRational) {
        self.numer *= &rhs.numer;
        self.denom *= &rhs.denom;
        self.reduce();
    }
}

impl MulAssign<BigRational> for BigRational {
    fn mul_assign(&mut self, rhs: BigRational) { *self *= &rhs }
}

impl Add for BigRational {
    type Output = BigRational;

    fn add(mut self, rhs: BigRational) -> BigRational {
        self += &rhs;
        self
    }
}

impl Add for &BigRational {
    type Output = BigRational;

    fn add(self, rhs: &BigRational) -> BigRational {
        let mut w = self.clone();
        w += rhs;
        w
    }
}

impl Sub for BigRational {
    type Output = BigRational;

    fn sub(mut self, rhs: BigRational) -> BigRational {
        self -= &rhs;
        self
    }
}

impl Sub for &BigRational {
    type Output = BigRational;

    fn sub(self, rhs: &BigRational) -> BigRational {
        let mut w = self.clone();
        w -= rhs;
        w
    }
}

impl Mul for BigRational {
    type Output = BigRational;

    fn mul(mut self, rhs: BigRational) -> BigRational {
        self *= &rhs;
        self
    }
}

impl Mul for &BigRational {
    type Output = BigRational;

    fn mul(self, rhs: &BigRational) -> BigRational {
        let mut w = self.clone();
        w *= rhs;
        w
    }
}

impl Div for &BigRational {
    type Output = BigRational;

    fn div(self, rhs: &BigRational) -> BigRational {
        match self.checked_div(rhs) {
            Ok(w) => w,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Div for BigRational {
    type Output = BigRational;

    fn div(self, rhs: BigRational) -> BigRational { &self / &rhs }
}

impl DivAssign<&BigRational> for BigRational {
    fn div_assign(&mut self, rhs: &BigRational) { *self = &*self / rhs }
}

impl DivAssign<BigRational> for BigRational {
    fn div_assign(&mut self, rhs: BigRational) { *self /= &rhs }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.numer, f)?;
        if !self.denom.is_one() {
            write!(f, "/{}", self.denom)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(self, f) }
}

impl FromStr for BigRational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<BigRational, ParseRationalError> {
        let s = s.trim_start();
        let (negative, rest) = match s.bytes().next() {
            Some(b'+') => (false, &s[1..]),
            Some(b'-') => (true, &s[1..]),
            _ => (false, s),
        };
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| rest.len());
        let mut numer = BigUint::from_decimal_digits(&rest[..digits_end])?;
        let mut denom = BigUint::one();
        let tail = &rest[digits_end..];
        match tail.bytes().next() {
            None => {}
            Some(b'/') => {
                denom = BigUint::from_decimal_digits(&tail[1..])?;
            }
            Some(b'.') => {
                // Each fraction digit scales both sides by ten.
                for c in tail[1..].chars() {
                    match c.to_digit(10) {
                        Some(d) => {
                            numer.mul_add_assign(10, d);
                            denom.mul_add_assign(10, 0);
                        }
                        None => {
                            return Err(crate::error::ParseNumberError::UnexpectedChar(c).into())
                        }
                    }
                }
            }
            Some(_) => {
                let c = tail.chars().next().unwrap_or('\0');
                return Err(crate::error::ParseNumberError::UnexpectedChar(c).into());
            }
        }
        let mut numer = BigInt::from(numer);
        if negative {
            numer = -numer;
        }
        Ok(BigRational::checked_new(numer, BigInt::from(denom))?)
    }
}

impl Serialize for BigRational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserializes from either the canonical string form (`"22/7"`, `"-1.5"`,
/// `"42"`) or a [`Fraction`] object.
impl<'de> Deserialize<'de> for BigRational {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BigRationalHelper {
            Text(String),
            Fraction(Fraction),
        }

        match Deserialize::deserialize(deserializer)? {
            BigRationalHelper::Text(s) => s
                .parse()
                .map_err(|e| serde::de::Error::custom(format!("invalid rational {}: {}", s, e))),
            BigRationalHelper::Fraction(f) => Ok(f.into()),
        }
    }
}
