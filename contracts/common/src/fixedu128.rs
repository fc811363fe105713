use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, U256};

use crate::DECIMALS;

/// Fixed type with inner type of u128 and fixed denominator 10e18
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedU128(u128);

impl FixedU128 {
    pub const DENOMINATOR: u128 = 10u128.pow(DECIMALS);
    pub const ZERO: FixedU128 = FixedU128(0);
    pub const ONE: FixedU128 = FixedU128(Self::DENOMINATOR);

    /// Returns inner value
    pub const fn into_inner(self) -> u128 {
        self.0
    }

    /// Construct FixedU128 from inner value
    pub fn from_inner<T: Into<u128>>(inner: T) -> FixedU128 {
        FixedU128(inner.into())
    }

    /// Construct fixed value from rational, e.g. 0.05 as 5 / 100
    /// Returns None when the result or remainder * 10e18 doesn't fit into u128.
    pub fn from_rational<N: Into<u128>, D: Into<u128>>(nom: N, denom: D) -> Option<FixedU128> {
        let nom = nom.into();
        let denom = denom.into();

        // nom = whole * denom + rest
        let whole = nom.checked_div(denom)?;
        let rest = nom % denom;

        whole
            .checked_mul(Self::DENOMINATOR)?
            .checked_add(rest.checked_mul(Self::DENOMINATOR)?.checked_div(denom)?)
            .map(FixedU128)
    }

    /// Construct fixed value from rational with 256-bit intermediate.
    /// Returns None when denominator is zero or the result doesn't fit into u128.
    pub fn from_rational_wide<N: Into<u128>, D: Into<u128>>(
        env: &Env,
        nom: N,
        denom: D,
    ) -> Option<FixedU128> {
        let nom = nom.into();
        let denom = denom.into();

        if denom == 0 {
            return None;
        }

        if let Some(fixed) = Self::from_rational(nom, denom) {
            return Some(fixed);
        }

        mul_div_floor_wide(env, nom, Self::DENOMINATOR, denom).map(FixedU128)
    }

    /// Construct fixed from int value, e.g. 10 units as 10 * 10e18
    pub fn from_int<T: Into<u128>>(value: T) -> Option<FixedU128> {
        Self::DENOMINATOR.checked_mul(value.into()).map(FixedU128)
    }

    /// Converts to int value with `precision` decimals, truncating the rest.
    /// Precision 0 gives whole units.
    pub fn to_precision(self, precision: u32) -> Option<u128> {
        if precision <= DECIMALS {
            let prec_denom = 10u128.checked_pow(DECIMALS - precision)?;
            return self.0.checked_div(prec_denom);
        }

        let prec_mul = 10u128.checked_pow(precision - DECIMALS)?;
        self.0.checked_mul(prec_mul)
    }

    /// Multiplication of two fixed values.
    /// Returns None when the 128-bit intermediate product overflows.
    pub fn checked_mul(self, value: FixedU128) -> Option<FixedU128> {
        self.0
            .fixed_mul_floor(value.0, Self::DENOMINATOR)
            .map(FixedU128)
    }

    /// Division of two FixedU128 values.
    /// Returns None when divisor is zero or the 128-bit intermediate overflows.
    pub fn checked_div(self, value: FixedU128) -> Option<FixedU128> {
        self.0
            .fixed_div_floor(value.0, Self::DENOMINATOR)
            .map(FixedU128)
    }

    /// Multiplication of two fixed values with 256-bit intermediate.
    /// Returns None only when the result itself doesn't fit into u128.
    pub fn mul_wide(self, env: &Env, value: FixedU128) -> Option<FixedU128> {
        if let Some(product) = self.checked_mul(value) {
            return Some(product);
        }

        mul_div_floor_wide(env, self.0, value.0, Self::DENOMINATOR).map(FixedU128)
    }

    /// Division of two fixed values with 256-bit intermediate.
    /// Returns None when divisor is zero or the result doesn't fit into u128.
    pub fn div_wide(self, env: &Env, value: FixedU128) -> Option<FixedU128> {
        if value.is_zero() {
            return None;
        }

        if let Some(quotient) = self.checked_div(value) {
            return Some(quotient);
        }

        mul_div_floor_wide(env, self.0, Self::DENOMINATOR, value.0).map(FixedU128)
    }

    /// Sum of two fixed values
    pub fn checked_add(self, value: FixedU128) -> Option<FixedU128> {
        self.0.checked_add(value.0).map(FixedU128)
    }

    /// Subtraction of two fixed values
    pub fn checked_sub(self, other: FixedU128) -> Option<FixedU128> {
        self.0.checked_sub(other.0).map(FixedU128)
    }

    /// Returns true if self is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// x * y / z rounded towards zero. `z` must be non zero.
fn mul_div_floor_wide(env: &Env, x: u128, y: u128, z: u128) -> Option<u128> {
    U256::from_u128(env, x)
        .mul(&U256::from_u128(env, y))
        .div(&U256::from_u128(env, z))
        .to_u128()
}
