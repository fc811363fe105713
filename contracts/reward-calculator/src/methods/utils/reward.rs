use common::FixedU128;
use reward_calculator_interface::types::error::Error;
use reward_calculator_interface::types::reward_breakdown::RewardBreakdown;
use reward_calculator_interface::types::reward_params::RewardParams;
use soroban_sdk::Env;

use super::fixed_math::{add, one_minus, ratio, scale_mul};
use super::validation::require_valid_supply;

/// Calculates reward with all intermediate terms
///
/// scarcity_ratio = circulating / total_supply
/// supply_adjustment = kr * (1 - scarcity_ratio)
/// volatility_adjustment = kv * volatility
/// base_value = eth_amount * imv
/// multiplier = 1 + supply_adjustment + volatility_adjustment
/// reward = base_value * multiplier
pub fn calc_reward_breakdown(env: &Env, params: &RewardParams) -> Result<RewardBreakdown, Error> {
    require_valid_supply(params)?;

    let scarcity_ratio = ratio(
        env,
        FixedU128::from_inner(params.circulating),
        FixedU128::from_inner(params.total_supply),
    )?;

    let supply_adjustment = scale_mul(
        env,
        FixedU128::from_inner(params.kr),
        one_minus(scarcity_ratio)?,
    )?;

    let volatility_adjustment = scale_mul(
        env,
        FixedU128::from_inner(params.kv),
        FixedU128::from_inner(params.volatility),
    )?;

    let base_value = scale_mul(
        env,
        FixedU128::from_inner(params.eth_amount),
        FixedU128::from_inner(params.imv),
    )?;

    let multiplier = add(
        add(FixedU128::ONE, supply_adjustment)?,
        volatility_adjustment,
    )?;

    let reward = scale_mul(env, base_value, multiplier)?;

    Ok(RewardBreakdown {
        scarcity_ratio: scarcity_ratio.into_inner(),
        supply_adjustment: supply_adjustment.into_inner(),
        volatility_adjustment: volatility_adjustment.into_inner(),
        base_value: base_value.into_inner(),
        multiplier: multiplier.into_inner(),
        reward: reward.into_inner(),
    })
}

pub fn calc_reward(env: &Env, params: &RewardParams) -> Result<FixedU128, Error> {
    calc_reward_breakdown(env, params).map(|breakdown| FixedU128::from_inner(breakdown.reward))
}
