use reward_calculator_interface::types::error::Error;
use reward_calculator_interface::types::reward_params::RewardParams;
use soroban_sdk::{log, Env};

use super::utils::reward::calc_reward;

pub fn calculate_rewards(env: &Env, params: &RewardParams) -> Result<u128, Error> {
    calc_reward(env, params)
        .map(|reward| reward.into_inner())
        .map_err(|err| {
            log!(env, "calculate_rewards failed", err as u32);
            err
        })
}
