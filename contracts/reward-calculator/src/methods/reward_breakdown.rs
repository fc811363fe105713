use reward_calculator_interface::types::error::Error;
use reward_calculator_interface::types::reward_breakdown::RewardBreakdown;
use reward_calculator_interface::types::reward_params::RewardParams;
use soroban_sdk::{log, Env};

use super::utils::reward::calc_reward_breakdown;

pub fn reward_breakdown(env: &Env, params: &RewardParams) -> Result<RewardBreakdown, Error> {
    calc_reward_breakdown(env, params).map_err(|err| {
        log!(env, "reward_breakdown failed", err as u32);
        err
    })
}
