use reward_calculator_interface::types::error::Error;
use reward_calculator_interface::types::reward_params::RewardParams;

use crate::constants::MAX_BATCH_SIZE;

/// Total supply is a divisor and circulating supply can't exceed it
pub fn require_valid_supply(params: &RewardParams) -> Result<(), Error> {
    if params.total_supply == 0 {
        return Err(Error::DivisionByZero);
    }

    if params.circulating > params.total_supply {
        return Err(Error::InvalidSupplyRatio);
    }

    Ok(())
}

pub fn require_valid_batch_size(len: u32) -> Result<(), Error> {
    if len > MAX_BATCH_SIZE {
        return Err(Error::BatchTooLarge);
    }

    Ok(())
}
