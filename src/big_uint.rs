//! Unbounded natural number stored as little-endian base 2^32 digits.
//!
//! This is the engine the signed and rational layers are built on: ripple
//! carry addition and subtraction, schoolbook multiplication, and normalized
//! long division that exposes the quotient/remainder primitive reused by the
//! decimal formatter and the rational layer.

use crate::error::{DivideByZeroError, ParseNumberError, UnderflowError};
use lazy_static::lazy_static;
use num_traits::{One, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
               Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign,
               Sub, SubAssign};
use std::str::FromStr;

/// Width of a single digit in bits.
pub const DIGIT_BITS: u32 = 32;

type Digit = u32;
type Wide = u64;

const MAX_DIGIT: Wide = (1 << DIGIT_BITS as Wide) - 1;

lazy_static! {
    pub(crate) static ref TEN: BigUint = BigUint::from(10u32);
}

/// Unbounded non-negative integer.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigUint {
    /// Digit sequence, least significant first. Never empty; the most
    /// significant digit is non-zero unless the value is zero, which is
    /// uniquely `[0]`.
    digits: Vec<Digit>,
}

impl BigUint {
    fn top(&self) -> Digit { self.digits[self.digits.len() - 1] }

    fn trim(&mut self) {
        while self.digits.len() > 1 && self.top() == 0 {
            self.digits.pop();
        }
    }

    /// Number of significant bits; zero for zero.
    pub fn bits(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        (self.digits.len() as u64 - 1) * u64::from(DIGIT_BITS)
            + u64::from(DIGIT_BITS - self.top().leading_zeros())
    }

    /// The lowest 32 bits of the value.
    pub fn low_u32(&self) -> u32 { self.digits[0] }

    /// Greatest common divisor by Euclidean remainder iteration.
    /// `gcd(0, v) == v`.
    pub fn gcd(&self, other: &BigUint) -> BigUint {
        let mut d = self.clone();
        let mut c = other.clone();
        while !c.is_zero() {
            let r = &d % &c;
            d = c;
            c = r;
        }
        d
    }

    /// Raises the value to `exp` by binary exponentiation.
    pub fn pow(&self, mut exp: u32) -> BigUint {
        let mut base = self.clone();
        let mut acc = BigUint::one();
        while exp != 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp != 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// `self & !v`, truncated to at most `v`'s length. This is the exact
    /// primitive the signed layer needs for its two's-complement identities.
    pub fn and_not(&self, v: &BigUint) -> BigUint {
        let mut u = self.clone();
        if u.digits.len() > v.digits.len() {
            u.digits.truncate(v.digits.len());
        }
        for (d, vd) in u.digits.iter_mut().zip(&v.digits) {
            *d &= !vd;
        }
        u.trim();
        u
    }

    /// `self - rhs`, or an underflow error when `rhs` is larger.
    pub fn checked_sub(&self, rhs: &BigUint) -> Result<BigUint, UnderflowError> {
        if *self < *rhs {
            return Err(UnderflowError);
        }
        let mut w = self.clone();
        w -= rhs;
        Ok(w)
    }

    /// Quotient and remainder in one pass: `self == q * v + r`, `r < v`.
    pub fn checked_div_rem(&self, v: &BigUint) -> Result<(BigUint, BigUint), DivideByZeroError> {
        if v.is_zero() {
            return Err(DivideByZeroError);
        }
        let mut r = self.clone();
        let n = v.digits.len();
        if self.digits.len() < n {
            return Ok((BigUint::zero(), r));
        }

        // Normalize so the divisor's top digit has its high bit set; this
        // bounds the estimation error of each quotient digit to 2.
        let d = v.top().leading_zeros();
        let mut v = v.clone();
        v <<= d as usize;
        r <<= d as usize;
        let vn = Wide::from(v.top());

        // One extra high digit keeps the first quotient digit single-width.
        r.digits.push(0);
        let m = r.digits.len();
        let mut q = BigUint { digits: vec![0; m - n] };
        let mut w = vec![0 as Digit; n + 1];

        for j in (0..m - n).rev() {
            // Estimate the quotient digit from the top two remainder digits.
            let mut qhat = ((Wide::from(r.digits[j + n]) << DIGIT_BITS
                | Wide::from(r.digits[j + n - 1]))
                / vn)
                .min(MAX_DIGIT);

            // Partial product w = qhat * v.
            let mut k: Wide = 0;
            for i in 0..n {
                k += qhat * Wide::from(v.digits[i]);
                w[i] = k as Digit;
                k >>= DIGIT_BITS;
            }
            w[n] = k as Digit;

            // qhat may overshoot by at most two; compare w against the
            // remainder window from the top and back off until it fits.
            loop {
                let mut i = n;
                while i != 0 && r.digits[j + i] == w[i] {
                    i -= 1;
                }
                if r.digits[j + i] >= w[i] {
                    break;
                }
                qhat -= 1;
                let mut k: i64 = 0;
                for i in 0..n {
                    k += i64::from(w[i]) - i64::from(v.digits[i]);
                    w[i] = k as Digit;
                    k >>= DIGIT_BITS;
                }
                w[n] = (i64::from(w[n]) + k) as Digit;
            }
            q.digits[j] = qhat as Digit;

            // Subtract the partial product from the window. The true
            // difference fits in n digits, so the final borrow is dropped.
            let mut k: i64 = 0;
            for i in 0..n {
                k += i64::from(r.digits[j + i]) - i64::from(w[i]);
                r.digits[j + i] = k as Digit;
                k >>= DIGIT_BITS;
            }
        }

        q.trim();
        r.digits.truncate(n);
        r >>= d as usize;
        Ok((q, r))
    }

    /// Panicking variant of [`BigUint::checked_div_rem`].
    pub fn div_rem(&self, v: &BigUint) -> (BigUint, BigUint) {
        match self.checked_div_rem(v) {
            Ok(qr) => qr,
            Err(_) => panic!("division by zero"),
        }
    }

    /// `self / rhs` without the panic.
    pub fn checked_div(&self, rhs: &BigUint) -> Result<BigUint, DivideByZeroError> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// `self % rhs` without the panic.
    pub fn checked_rem(&self, rhs: &BigUint) -> Result<BigUint, DivideByZeroError> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    /// In-place `self = self * m + a` on single-digit operands; the workhorse
    /// of decimal parsing.
    pub(crate) fn mul_add_assign(&mut self, m: Digit, a: Digit) {
        let mut k = Wide::from(a);
        for d in &mut self.digits {
            k += Wide::from(*d) * Wide::from(m);
            *d = k as Digit;
            k >>= DIGIT_BITS;
        }
        if k != 0 {
            self.digits.push(k as Digit);
        }
        self.trim();
    }

    /// Parses a bare digit run; the whole input must be ASCII digits.
    pub(crate) fn from_decimal_digits(s: &str) -> Result<BigUint, ParseNumberError> {
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let mut value = BigUint::zero();
        for c in s.chars() {
            match c.to_digit(10) {
                Some(d) => value.mul_add_assign(10, d),
                None => return Err(ParseNumberError::UnexpectedChar(c)),
            }
        }
        Ok(value)
    }
}

impl Default for BigUint {
    fn default() -> BigUint { BigUint::zero() }
}

impl Zero for BigUint {
    fn zero() -> BigUint { BigUint { digits: vec![0] } }

    fn is_zero(&self) -> bool { self.digits.len() == 1 && self.digits[0] == 0 }
}

impl One for BigUint {
    fn one() -> BigUint { BigUint { digits: vec![1] } }
}

impl From<u32> for BigUint {
    fn from(u: u32) -> BigUint { BigUint { digits: vec![u] } }
}

impl From<u64> for BigUint {
    fn from(u: u64) -> BigUint {
        let mut w = BigUint {
            digits: vec![u as Digit, (u >> DIGIT_BITS) as Digit],
        };
        w.trim();
        w
    }
}

impl From<usize> for BigUint {
    fn from(u: usize) -> BigUint { BigUint::from(u as u64) }
}

impl Ord for BigUint {
    fn cmp(&self, other: &BigUint) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => self.digits.iter().rev().cmp(other.digits.iter().rev()),
            ord => ord,
        }
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        let n = rhs.digits.len();
        if self.digits.len() < n {
            self.digits.resize(n, 0);
        }
        let mut k: Wide = 0;
        let mut j = 0;
        while j < n {
            k += Wide::from(self.digits[j]) + Wide::from(rhs.digits[j]);
            self.digits[j] = k as Digit;
            k >>= DIGIT_BITS;
            j += 1;
        }
        while k != 0 && j < self.digits.len() {
            k += Wide::from(self.digits[j]);
            self.digits[j] = k as Digit;
            k >>= DIGIT_BITS;
            j += 1;
        }
        if k != 0 {
            self.digits.push(1);
        }
    }
}

impl AddAssign<BigUint> for BigUint {
    fn add_assign(&mut self, rhs: BigUint) { *self += &rhs }
}

impl AddAssign<u32> for BigUint {
    fn add_assign(&mut self, rhs: u32) {
        let mut k = Wide::from(rhs);
        for d in &mut self.digits {
            if k == 0 {
                break;
            }
            k += Wide::from(*d);
            *d = k as Digit;
            k >>= DIGIT_BITS;
        }
        if k != 0 {
            self.digits.push(k as Digit);
        }
    }
}

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: &BigUint) {
        if *self < *rhs {
            panic!("attempt to subtract with underflow");
        }
        let mut k: i64 = 0;
        let mut j = 0;
        while j < rhs.digits.len() {
            k += i64::from(self.digits[j]) - i64::from(rhs.digits[j]);
            self.digits[j] = k as Digit;
            k >>= DIGIT_BITS;
            j += 1;
        }
        while k != 0 && j < self.digits.len() {
            k += i64::from(self.digits[j]);
            self.digits[j] = k as Digit;
            k >>= DIGIT_BITS;
            j += 1;
        }
        self.trim();
    }
}

impl SubAssign<BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: BigUint) { *self -= &rhs }
}

impl SubAssign<u32> for BigUint {
    fn sub_assign(&mut self, rhs: u32) {
        if self.digits.len() == 1 && self.digits[0] < rhs {
            panic!("attempt to subtract with underflow");
        }
        let mut k = -i64::from(rhs);
        for d in &mut self.digits {
            if k == 0 {
                break;
            }
            k += i64::from(*d);
            *d = k as Digit;
            k >>= DIGIT_BITS;
        }
        self.trim();
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) { *self = &*self * rhs }
}

impl MulAssign<BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: BigUint) { *self *= &rhs }
}

impl DivAssign<&BigUint> for BigUint {
    fn div_assign(&mut self, rhs: &BigUint) { *self = self.div_rem(rhs).0 }
}

impl RemAssign<&BigUint> for BigUint {
    fn rem_assign(&mut self, rhs: &BigUint) { *self = self.div_rem(rhs).1 }
}

impl Add for BigUint {
    type Output = BigUint;

    fn add(mut self, rhs: BigUint) -> BigUint {
        self += &rhs;
        self
    }
}

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> BigUint {
        let mut w = self.clone();
        w += rhs;
        w
    }
}

impl Sub for BigUint {
    type Output = BigUint;

    fn sub(mut self, rhs: BigUint) -> BigUint {
        self -= &rhs;
        self
    }
}

impl Sub for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &BigUint) -> BigUint {
        let mut w = self.clone();
        w -= rhs;
        w
    }
}

impl Mul for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        let m = self.digits.len();
        let n = rhs.digits.len();
        let mut w = vec![0 as Digit; m + n];
        for j in 0..n {
            let vj = Wide::from(rhs.digits[j]);
            let mut k: Wide = 0;
            for i in 0..m {
                k += Wide::from(self.digits[i]) * vj + Wide::from(w[i + j]);
                w[i + j] = k as Digit;
                k >>= DIGIT_BITS;
            }
            w[j + m] = k as Digit;
        }
        let mut w = BigUint { digits: w };
        w.trim();
        w
    }
}

impl Mul for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: BigUint) -> BigUint { &self * &rhs }
}

impl Div for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> BigUint { self.div_rem(rhs).0 }
}

impl Div for BigUint {
    type Output = BigUint;

    fn div(self, rhs: BigUint) -> BigUint { &self / &rhs }
}

impl Rem for &BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> BigUint { self.div_rem(rhs).1 }
}

impl Rem for BigUint {
    type Output = BigUint;

    fn rem(self, rhs: BigUint) -> BigUint { &self % &rhs }
}

impl ShlAssign<usize> for BigUint {
    fn shl_assign(&mut self, rhs: usize) {
        if self.is_zero() || rhs == 0 {
            return;
        }
        let words = rhs / DIGIT_BITS as usize;
        let bits = (rhs % DIGIT_BITS as usize) as u32;
        if words > 0 {
            let mut shifted = vec![0; words];
            shifted.extend_from_slice(&self.digits);
            self.digits = shifted;
        }
        if bits > 0 {
            let mut k: Wide = 0;
            for d in self.digits.iter_mut().skip(words) {
                k |= Wide::from(*d) << bits;
                *d = k as Digit;
                k >>= DIGIT_BITS;
            }
            if k != 0 {
                self.digits.push(k as Digit);
            }
        }
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(mut self, rhs: usize) -> BigUint {
        self <<= rhs;
        self
    }
}

impl ShrAssign<usize> for BigUint {
    fn shr_assign(&mut self, rhs: usize) {
        let words = rhs / DIGIT_BITS as usize;
        if words >= self.digits.len() {
            self.digits.clear();
            self.digits.push(0);
            return;
        }
        self.digits.drain(..words);
        let bits = (rhs % DIGIT_BITS as usize) as u32;
        if bits > 0 {
            let mut k: Wide = 0;
            for d in self.digits.iter_mut().rev() {
                k = k << DIGIT_BITS | Wide::from(*d);
                *d = (k >> bits) as Digit;
                k = Wide::from(k as Digit);
            }
        }
        self.trim();
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(mut self, rhs: usize) -> BigUint {
        self >>= rhs;
        self
    }
}

impl BitAndAssign<&BigUint> for BigUint {
    fn bitand_assign(&mut self, rhs: &BigUint) {
        if self.digits.len() > rhs.digits.len() {
            self.digits.truncate(rhs.digits.len());
        }
        for (d, rd) in self.digits.iter_mut().zip(&rhs.digits) {
            *d &= rd;
        }
        self.trim();
    }
}

impl BitAnd for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: &BigUint) -> BigUint {
        let mut w = self.clone();
        w &= rhs;
        w
    }
}

impl BitAnd for BigUint {
    type Output = BigUint;

    fn bitand(mut self, rhs: BigUint) -> BigUint {
        self &= &rhs;
        self
    }
}

impl BitOrAssign<&BigUint> for BigUint {
    fn bitor_assign(&mut self, rhs: &BigUint) {
        let n = rhs.digits.len();
        if self.digits.len() < n {
            self.digits.resize(n, 0);
        }
        for j in 0..n {
            self.digits[j] |= rhs.digits[j];
        }
    }
}

impl BitOr for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: &BigUint) -> BigUint {
        let mut w = self.clone();
        w |= rhs;
        w
    }
}

impl BitOr for BigUint {
    type Output = BigUint;

    fn bitor(mut self, rhs: BigUint) -> BigUint {
        self |= &rhs;
        self
    }
}

impl BitXorAssign<&BigUint> for BigUint {
    fn bitxor_assign(&mut self, rhs: &BigUint) {
        let n = rhs.digits.len();
        if self.digits.len() < n {
            self.digits.resize(n, 0);
        }
        for j in 0..n {
            self.digits[j] ^= rhs.digits[j];
        }
        self.trim();
    }
}

impl BitXor for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: &BigUint) -> BigUint {
        let mut w = self.clone();
        w ^= rhs;
        w
    }
}

impl BitXor for BigUint {
    type Output = BigUint;

    fn bitxor(mut self, rhs: BigUint) -> BigUint {
        self ^= &rhs;
        self
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut q = self.clone();
        let mut buf = String::new();
        loop {
            let (next, r) = q.div_rem(&TEN);
            buf.push(char::from(b'0' + r.low_u32() as u8));
            q = next;
            if q.is_zero() {
                break;
            }
        }
        f.write_str(&buf.chars().rev().collect::<String>())
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(self, f) }
}

impl FromStr for BigUint {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<BigUint, ParseNumberError> {
        BigUint::from_decimal_digits(s.trim_start())
    }
}

impl Serialize for BigUint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigUint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BigUintVisitor;

        impl<'de> de::Visitor<'de> for BigUintVisitor {
            type Value = BigUint;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a decimal digit string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(|e| {
                    let err = format!("{:?} is not a valid BigUint: {}", v, e);
                    de::Error::custom(err)
                })
            }
        }

        deserializer.deserialize_str(BigUintVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{self as json};

    fn big(s: &str) -> BigUint { s.parse().unwrap() }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for s in &["0", "1", "7", "4294967295", "4294967296", "18446744073709551616",
                   "1000000000000000000000000000000000000000000"] {
            assert_eq!(*s, big(s).to_string());
        }
        // Leading zeros and whitespace are accepted on input only.
        assert_eq!("7", big("007").to_string());
        assert_eq!("123", big("  123").to_string());
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!("".parse::<BigUint>(), Err(ParseNumberError::Empty));
        assert_eq!("   ".parse::<BigUint>(), Err(ParseNumberError::Empty));
        assert_eq!("12a".parse::<BigUint>(), Err(ParseNumberError::UnexpectedChar('a')));
        assert_eq!("+1".parse::<BigUint>(), Err(ParseNumberError::UnexpectedChar('+')));
        assert_eq!("123 ".parse::<BigUint>(), Err(ParseNumberError::UnexpectedChar(' ')));
    }

    #[test]
    fn test_add_carry_chain() {
        let x = big("4294967295");
        assert_eq!(big("4294967296"), &x + &BigUint::one());
        let y = big("18446744073709551615");
        assert_eq!(big("18446744073709551616"), &y + &BigUint::one());
        assert_eq!(big("23058430092136939510"), &y + &x + big("4611686014132420600"));
    }

    #[test]
    fn test_add_small() {
        let mut x = big("4294967295");
        x += 1u32;
        assert_eq!(big("4294967296"), x);
        let mut y = BigUint::zero();
        y += 0u32;
        assert!(y.is_zero());
    }

    #[test]
    fn test_sub_borrow_chain() {
        let x = big("18446744073709551616");
        assert_eq!(big("18446744073709551615"), &x - &BigUint::one());
        assert!( (&x - &x).is_zero() );
        let mut y = big("4294967296");
        y -= 1u32;
        assert_eq!(big("4294967295"), y);
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn test_sub_underflow_panics() {
        let _ = BigUint::from(3u32) - BigUint::from(5u32);
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn test_decrement_zero_panics() {
        let mut z = BigUint::zero();
        z -= 1u32;
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(Err(UnderflowError), BigUint::from(3u32).checked_sub(&BigUint::from(5u32)));
        assert_eq!(Ok(BigUint::from(2u32)), BigUint::from(5u32).checked_sub(&BigUint::from(3u32)));
    }

    #[test]
    fn test_mul() {
        let x = big("1000000000000000000000");
        assert_eq!(big("1000000000000000000000000000000000000000000"), &x * &x);
        assert_eq!(x, &x * &BigUint::one());
        assert!((&x * &BigUint::zero()).is_zero());
        // Commutativity on mixed digit counts.
        let y = big("12345678901234567890123456789");
        assert_eq!(&x * &y, &y * &x);
    }

    #[test]
    fn test_div_rem_basics() {
        let (q, r) = big("100").div_rem(&big("7"));
        assert_eq!(big("14"), q);
        assert_eq!(big("2"), r);

        // Dividend shorter than divisor.
        let (q, r) = big("7").div_rem(&big("18446744073709551616"));
        assert!(q.is_zero());
        assert_eq!(big("7"), r);

        // Equal-length dividend smaller than divisor.
        let (q, r) = big("4294967296").div_rem(&big("8589934592"));
        assert!(q.is_zero());
        assert_eq!(big("4294967296"), r);

        let (q, r) = big("0").div_rem(&big("3"));
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_reconstruction() {
        let cases = [
            ("1000000000000000000000000000000000000007", "31415926535897932384"),
            ("340282366920938463463374607431768211455", "18446744073709551616"),
            ("98765432109876543210987654321098765432109876543210", "12345678901234567890"),
            ("18446744073709551615", "4294967296"),
            ("170141183460469231731687303715884105727", "3"),
        ];
        for (u, v) in &cases {
            let u = big(u);
            let v = big(v);
            let (q, r) = u.div_rem(&v);
            assert!(r < v, "remainder {} not below divisor {}", r, v);
            assert_eq!(u, &(&q * &v) + &r, "{} / {}", u, v);
        }
    }

    #[test]
    fn test_div_rem_divisor_above_power_of_two() {
        // A divisor just above a power of two keeps the normalized top digit
        // minimal, which is where the quotient estimate is least accurate.
        let u = (BigUint::one() << 96) - BigUint::one();
        let v = (BigUint::one() << 64) + BigUint::one();
        let (q, r) = u.div_rem(&v);
        assert_eq!(big("4294967295"), q);
        assert_eq!(big("18446744069414584320"), r);
        assert_eq!(u, &(&q * &v) + &r);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = big("5").div_rem(&BigUint::zero());
    }

    #[test]
    fn test_checked_div_rem_zero_divisor() {
        assert_eq!(Err(DivideByZeroError), big("5").checked_div_rem(&BigUint::zero()));
        assert_eq!(Err(DivideByZeroError), big("5").checked_div(&BigUint::zero()));
        assert_eq!(Err(DivideByZeroError), big("5").checked_rem(&BigUint::zero()));
    }

    #[test]
    fn test_shift_multiply_equivalence() {
        let x = big("123456789012345678901234567890");
        for k in &[0usize, 1, 31, 32, 33, 64, 100] {
            let two_k = BigUint::from(2u32).pow(*k as u32);
            assert_eq!(&x * &two_k, x.clone() << *k, "x << {}", k);
            assert_eq!(&x / &two_k, x.clone() >> *k, "x >> {}", k);
        }
        // Shifting zero stays zero.
        assert!((BigUint::zero() << 100).is_zero());
        assert!((BigUint::zero() >> 100).is_zero());
        // Right shift past the top word saturates to zero.
        assert!((big("65535") >> 64).is_zero());
    }

    #[test]
    fn test_bits() {
        assert_eq!(0, BigUint::zero().bits());
        assert_eq!(1, BigUint::one().bits());
        assert_eq!(2, BigUint::from(2u32).bits());
        assert_eq!(32, big("4294967295").bits());
        assert_eq!(33, big("4294967296").bits());
        assert_eq!(101, (BigUint::one() << 100).bits());
    }

    #[test]
    fn test_bitwise_matches_u64() {
        let samples: &[u64] = &[0, 1, 0xffff_ffff, 0x1_0000_0000, 0xdead_beef_cafe_babe, u64::MAX];
        for &a in samples {
            for &b in samples {
                let (x, y) = (BigUint::from(a), BigUint::from(b));
                assert_eq!(BigUint::from(a & b), &x & &y);
                assert_eq!(BigUint::from(a | b), &x | &y);
                assert_eq!(BigUint::from(a ^ b), &x ^ &y);
                assert_eq!(BigUint::from(a & !b), x.and_not(&y));
            }
        }
    }

    #[test]
    fn test_bitwise_length_mismatch() {
        let long = (BigUint::one() << 100) | BigUint::from(0b1010u32);
        let short = BigUint::from(0b0110u32);
        // & truncates to the shorter operand, | and ^ keep the longer tail.
        assert_eq!(BigUint::from(0b0010u32), &long & &short);
        assert_eq!((BigUint::one() << 100) | BigUint::from(0b1110u32), &long | &short);
        assert_eq!((BigUint::one() << 100) | BigUint::from(0b1100u32), &long ^ &short);
        // and_not truncates to the mask's length.
        assert_eq!(BigUint::from(0b1000u32), long.and_not(&short));
        // xor of equal values trims back down to zero.
        assert!((&long ^ &long).is_zero());
    }

    #[test]
    fn test_low_u32() {
        assert_eq!(0, BigUint::zero().low_u32());
        assert_eq!(5, big("18446744073709551621").low_u32());
    }

    #[test]
    fn test_gcd() {
        assert_eq!(big("4"), big("12").gcd(&big("8")));
        assert_eq!(big("5"), BigUint::zero().gcd(&big("5")));
        assert_eq!(big("5"), big("5").gcd(&BigUint::zero()));
        assert_eq!(big("1000000000000000"), big("100000000000000000000").gcd(&big("1000000000000000")));
    }

    #[test]
    fn test_pow() {
        assert_eq!(BigUint::one(), TEN.pow(0));
        assert_eq!(big("100"), TEN.pow(2));
        assert_eq!(BigUint::one() << 100, BigUint::from(2u32).pow(100));
    }

    #[test]
    fn test_ordering() {
        assert!(big("9") < big("10"));
        assert!(big("4294967296") > big("4294967295"));
        assert!(big("18446744073709551616") > big("4294967296"));
        assert_eq!(big("42"), big("42"));
    }

    #[test]
    fn test_serde_string_form() {
        let num = big("1023");
        assert_eq!(r#""1023""#, json::to_string(&num).unwrap());
        let back: BigUint = json::from_str(r#""1023""#).unwrap();
        assert_eq!(num, back);
        assert!(json::from_str::<BigUint>(r#""abc""#).is_err());
    }

    #[test]
    fn test_debug_is_decimal() {
        assert_eq!("1023", format!("{:?}", big("1023")));
    }
}
