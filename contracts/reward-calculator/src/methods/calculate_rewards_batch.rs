use reward_calculator_interface::types::error::Error;
use reward_calculator_interface::types::reward_params::RewardParams;
use soroban_sdk::{log, Env, Vec};

use super::utils::reward::calc_reward;
use super::utils::validation::require_valid_batch_size;

pub fn calculate_rewards_batch(
    env: &Env,
    params: &Vec<RewardParams>,
) -> Result<Vec<u128>, Error> {
    require_valid_batch_size(params.len())?;

    let mut rewards = Vec::new(env);

    for (index, record) in params.iter().enumerate() {
        let reward = calc_reward(env, &record).map_err(|err| {
            log!(env, "calculate_rewards_batch failed", index as u32, err as u32);
            err
        })?;

        rewards.push_back(reward.into_inner());
    }

    Ok(rewards)
}
