pub mod calculate_rewards;
pub mod calculate_rewards_batch;
pub mod reward_breakdown;

pub mod utils;
