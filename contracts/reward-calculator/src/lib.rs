#![deny(warnings)]
#![no_std]

#[cfg(test)]
extern crate std;

use methods::{
    calculate_rewards::calculate_rewards, calculate_rewards_batch::calculate_rewards_batch,
    reward_breakdown::reward_breakdown,
};
use reward_calculator_interface::types::{
    error::Error, reward_breakdown::RewardBreakdown, reward_params::RewardParams,
};
use reward_calculator_interface::RewardCalculatorTrait;
use soroban_sdk::{contract, contractimpl, Env, Vec};

mod constants;
mod methods;
#[cfg(test)]
mod tests;

#[contract]
pub struct RewardCalculator;

#[contractimpl]
impl RewardCalculatorTrait for RewardCalculator {
    fn version() -> u32 {
        1
    }

    fn decimals() -> u32 {
        common::DECIMALS
    }

    fn calculate_rewards(env: Env, params: RewardParams) -> Result<u128, Error> {
        calculate_rewards(&env, &params)
    }

    fn reward_breakdown(env: Env, params: RewardParams) -> Result<RewardBreakdown, Error> {
        reward_breakdown(&env, &params)
    }

    fn calculate_rewards_batch(env: Env, params: Vec<RewardParams>) -> Result<Vec<u128>, Error> {
        calculate_rewards_batch(&env, &params)
    }
}
