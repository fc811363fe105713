#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env, Vec};
use types::error::Error;
use types::reward_breakdown::RewardBreakdown;
use types::reward_params::RewardParams;

pub mod types;

pub struct Spec;

/// Interface for RewardCalculator.
/// Every method is read-only: no storage access, no events, no external calls.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "RewardCalculatorClient")]
pub trait RewardCalculatorTrait {
    /// Return the contract interface version
    fn version() -> u32;

    /// Return the number of decimals of all fixed-point values
    fn decimals() -> u32;

    /// Calculate the reward for the given economic state
    fn calculate_rewards(env: Env, params: RewardParams) -> Result<u128, Error>;

    /// Same as `calculate_rewards` returning every intermediate term
    fn reward_breakdown(env: Env, params: RewardParams) -> Result<RewardBreakdown, Error>;

    /// Calculate rewards for each record in order. Fails on the first failing record.
    fn calculate_rewards_batch(env: Env, params: Vec<RewardParams>) -> Result<Vec<u128>, Error>;
}
