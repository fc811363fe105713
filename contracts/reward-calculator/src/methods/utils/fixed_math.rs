use common::FixedU128;
use reward_calculator_interface::types::error::Error;
use soroban_sdk::Env;

/// a * b / 10e18, truncated towards zero
pub fn scale_mul(env: &Env, a: FixedU128, b: FixedU128) -> Result<FixedU128, Error> {
    a.mul_wide(env, b).ok_or(Error::ArithmeticOverflow)
}

/// a * 10e18 / b, truncated towards zero
pub fn scale_div(env: &Env, a: FixedU128, b: FixedU128) -> Result<FixedU128, Error> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }

    a.div_wide(env, b).ok_or(Error::ArithmeticOverflow)
}

/// numerator / denominator as fixed value.
/// Not clamped, callers keep the result in the expected range.
pub fn ratio(env: &Env, numerator: FixedU128, denominator: FixedU128) -> Result<FixedU128, Error> {
    scale_div(env, numerator, denominator)
}

/// 1 - x
pub fn one_minus(x: FixedU128) -> Result<FixedU128, Error> {
    FixedU128::ONE
        .checked_sub(x)
        .ok_or(Error::ArithmeticUnderflow)
}

pub fn add(a: FixedU128, b: FixedU128) -> Result<FixedU128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}
