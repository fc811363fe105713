pub mod error;
pub mod reward_breakdown;
pub mod reward_params;
