
mod calculate_rewards_batch;
