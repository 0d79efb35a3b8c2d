//! Signed integer of unbounded magnitude in sign-magnitude form.
//!
//! Bitwise operators behave as if negative values were stored in
//! infinite-precision two's complement, which reduces every mixed-sign case
//! to magnitude arithmetic plus [`BigUint::and_not`].

use crate::big_uint::BigUint;
use crate::error::{DivideByZeroError, ParseNumberError};
use num_traits::{One, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not,
               Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};
use std::str::FromStr;

/// Sign of a [`BigInt`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Sign {
    Minus,
    Zero,
    Plus,
}

impl Sign {
    /// `-1`, `0` or `+1`.
    pub fn signum(self) -> i32 {
        match self {
            Sign::Minus => -1,
            Sign::Zero => 0,
            Sign::Plus => 1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Zero => Sign::Zero,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (x, y) if x == y => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// Signed integer of unbounded magnitude.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt {
    sign: Sign,
    mag: BigUint,
}

impl BigInt {
    /// The sign as an enum; `signum` gives the conventional integer form.
    pub fn sign(&self) -> Sign { self.sign }

    pub fn signum(&self) -> i32 { self.sign.signum() }

    /// Borrow of the magnitude.
    pub fn magnitude(&self) -> &BigUint { &self.mag }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: if self.sign == Sign::Zero { Sign::Zero } else { Sign::Plus },
            mag: self.mag.clone(),
        }
    }

    /// Number of significant bits of the magnitude.
    pub fn bits(&self) -> u64 { self.mag.bits() }

    fn normalize(&mut self) {
        if self.mag.is_zero() {
            self.sign = Sign::Zero;
        }
    }

    // += 1 with the sign crossing handled on the magnitude.
    fn inc(&mut self) {
        match self.sign {
            Sign::Minus => {
                self.mag -= 1u32;
                self.normalize();
            }
            _ => {
                self.sign = Sign::Plus;
                self.mag += 1u32;
            }
        }
    }

    // -= 1.
    fn dec(&mut self) {
        match self.sign {
            Sign::Plus => {
                self.mag -= 1u32;
                self.normalize();
            }
            _ => {
                self.sign = Sign::Minus;
                self.mag += 1u32;
            }
        }
    }

    fn add_signed(&mut self, rhs_sign: Sign, rhs_mag: &BigUint) {
        if self.sign == Sign::Zero {
            self.sign = rhs_sign;
            self.mag = rhs_mag.clone();
        } else if rhs_sign != Sign::Zero {
            if self.sign == rhs_sign {
                self.mag += rhs_mag;
            } else {
                match rhs_mag.cmp(&self.mag) {
                    Ordering::Less => self.mag -= rhs_mag,
                    Ordering::Equal => {
                        self.sign = Sign::Zero;
                        self.mag = BigUint::zero();
                    }
                    Ordering::Greater => {
                        self.mag = rhs_mag - &self.mag;
                        self.sign = rhs_sign;
                    }
                }
            }
        }
    }

    /// Truncating division, or an error for a zero divisor.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, DivideByZeroError> {
        let mag = self.mag.checked_div(&rhs.mag)?;
        let mut w = BigInt {
            sign: self.sign * rhs.sign,
            mag,
        };
        w.normalize();
        Ok(w)
    }

    /// Truncated remainder (takes the dividend's sign), or an error for a
    /// zero divisor.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, DivideByZeroError> {
        let mag = self.mag.checked_rem(&rhs.mag)?;
        let mut w = BigInt {
            sign: self.sign,
            mag,
        };
        w.normalize();
        Ok(w)
    }
}

impl Default for BigInt {
    fn default() -> BigInt { BigInt::zero() }
}

impl Zero for BigInt {
    fn zero() -> BigInt {
        BigInt {
            sign: Sign::Zero,
            mag: BigUint::zero(),
        }
    }

    fn is_zero(&self) -> bool { self.sign == Sign::Zero }
}

impl One for BigInt {
    fn one() -> BigInt {
        BigInt {
            sign: Sign::Plus,
            mag: BigUint::one(),
        }
    }
}

impl From<BigUint> for BigInt {
    fn from(mag: BigUint) -> BigInt {
        BigInt {
            sign: if mag.is_zero() { Sign::Zero } else { Sign::Plus },
            mag,
        }
    }
}

impl From<u32> for BigInt {
    fn from(u: u32) -> BigInt { BigUint::from(u).into() }
}

impl From<u64> for BigInt {
    fn from(u: u64) -> BigInt { BigUint::from(u).into() }
}

impl From<i32> for BigInt {
    fn from(i: i32) -> BigInt { BigInt::from(i64::from(i)) }
}

impl From<i64> for BigInt {
    fn from(i: i64) -> BigInt {
        BigInt {
            sign: match i.signum() {
                -1 => Sign::Minus,
                0 => Sign::Zero,
                _ => Sign::Plus,
            },
            mag: BigUint::from(i.unsigned_abs()),
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Minus => other.mag.cmp(&self.mag),
                Sign::Zero => Ordering::Equal,
                Sign::Plus => self.mag.cmp(&other.mag),
            },
            ord => ord,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt { -self.clone() }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) { self.add_signed(rhs.sign, &rhs.mag) }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: BigInt) { *self += &rhs }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) { self.add_signed(-rhs.sign, &rhs.mag) }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) { *self -= &rhs }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: BigInt) -> BigInt {
        self += &rhs;
        self
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut w = self.clone();
        w += rhs;
        w
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: BigInt) -> BigInt {
        self -= &rhs;
        self
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut w = self.clone();
        w -= rhs;
        w
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.sign = self.sign * rhs.sign;
        self.mag *= &rhs.mag;
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) { *self *= &rhs }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(mut self, rhs: BigInt) -> BigInt {
        self *= &rhs;
        self
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut w = self.clone();
        w *= rhs;
        w
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match self.checked_div(rhs) {
            Ok(w) => w,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> BigInt { &self / &rhs }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) { *self = &*self / rhs }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.checked_rem(rhs) {
            Ok(w) => w,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> BigInt { &self % &rhs }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) { *self = &*self % rhs }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, rhs: usize) { self.mag <<= rhs }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, rhs: usize) -> BigInt {
        self <<= rhs;
        self
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, rhs: usize) {
        self.mag >>= rhs;
        self.normalize();
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, rhs: usize) -> BigInt {
        self >>= rhs;
        self
    }
}

impl Not for BigInt {
    type Output = BigInt;

    // !x == -(x + 1)
    fn not(self) -> BigInt {
        let mut w = -self;
        w.dec();
        w
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt { !self.clone() }
}

impl BitAnd for BigInt {
    type Output = BigInt;

    fn bitand(mut self, mut rhs: BigInt) -> BigInt {
        if self.sign == Sign::Minus && rhs.sign == Sign::Minus {
            // -u & -v == -(((u-1) | (v-1)) + 1)
            self.mag -= 1u32;
            rhs.mag -= 1u32;
            self.mag |= &rhs.mag;
            self.mag += 1u32;
        } else {
            if self.sign == Sign::Plus && rhs.sign == Sign::Minus {
                // u & -v == u & !(v-1)
                rhs.mag -= 1u32;
                self.mag = self.mag.and_not(&rhs.mag);
            } else if self.sign == Sign::Minus && rhs.sign == Sign::Plus {
                self.mag -= 1u32;
                self.mag = rhs.mag.and_not(&self.mag);
            } else {
                self.mag &= &rhs.mag;
            }
            self.sign = if self.mag.is_zero() { Sign::Zero } else { Sign::Plus };
        }
        self
    }
}

impl BitAnd for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> BigInt { self.clone() & rhs.clone() }
}

impl BitOr for BigInt {
    type Output = BigInt;

    fn bitor(mut self, mut rhs: BigInt) -> BigInt {
        if self.sign == Sign::Minus && rhs.sign == Sign::Minus {
            // -u | -v == -(((u-1) & (v-1)) + 1)
            self.mag -= 1u32;
            rhs.mag -= 1u32;
            self.mag &= &rhs.mag;
            self.mag += 1u32;
        } else if self.sign == Sign::Plus && rhs.sign == Sign::Minus {
            // u | -v == -(((v-1) & !u) + 1)
            self.sign = Sign::Minus;
            rhs.mag -= 1u32;
            self.mag = rhs.mag.and_not(&self.mag);
            self.mag += 1u32;
        } else if self.sign == Sign::Minus && rhs.sign == Sign::Plus {
            self.mag -= 1u32;
            self.mag = self.mag.and_not(&rhs.mag);
            self.mag += 1u32;
        } else {
            if self.sign == Sign::Zero {
                self.sign = rhs.sign;
            }
            self.mag |= &rhs.mag;
        }
        self
    }
}

impl BitOr for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> BigInt { self.clone() | rhs.clone() }
}

impl BitXor for BigInt {
    type Output = BigInt;

    fn bitxor(mut self, mut rhs: BigInt) -> BigInt {
        if self.sign == Sign::Minus && rhs.sign == Sign::Minus {
            // -u ^ -v == (u-1) ^ (v-1)
            self.mag -= 1u32;
            rhs.mag -= 1u32;
            self.mag ^= &rhs.mag;
            self.sign = if self.mag.is_zero() { Sign::Zero } else { Sign::Plus };
        } else if self.sign == Sign::Plus && rhs.sign == Sign::Minus {
            // u ^ -v == -((u ^ (v-1)) + 1)
            self.sign = Sign::Minus;
            rhs.mag -= 1u32;
            self.mag ^= &rhs.mag;
            self.mag += 1u32;
        } else if self.sign == Sign::Minus && rhs.sign == Sign::Plus {
            self.mag -= 1u32;
            self.mag ^= &rhs.mag;
            self.mag += 1u32;
        } else {
            if self.sign == Sign::Zero {
                self.sign = rhs.sign;
            }
            self.mag ^= &rhs.mag;
            self.normalize();
        }
        self
    }
}

impl BitXor for &BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> BigInt { self.clone() ^ rhs.clone() }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Minus {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&self.mag, f)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(self, f) }
}

impl FromStr for BigInt {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<BigInt, ParseNumberError> {
        let s = s.trim_start();
        let (sign, digits) = match s.bytes().next() {
            Some(b'+') => (Sign::Plus, &s[1..]),
            Some(b'-') => (Sign::Minus, &s[1..]),
            _ => (Sign::Plus, s),
        };
        let mag = BigUint::from_decimal_digits(digits)?;
        let mut w = BigInt { sign, mag };
        w.normalize();
        Ok(w)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BigIntVisitor;

        impl<'de> de::Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a decimal digit string with an optional sign")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(|e| {
                    let err = format!("{:?} is not a valid BigInt: {}", v, e);
                    de::Error::custom(err)
                })
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
