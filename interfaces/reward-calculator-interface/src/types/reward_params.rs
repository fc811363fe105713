use soroban_sdk::contracttype;

/// Economic state a reward is calculated for.
/// All values are fixed-point with 18 decimals, e.g. 0.05 is 50_000_000_000_000_000.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RewardParams {
    /// Value deposited by the caller
    pub eth_amount: u128,
    /// Intrinsic market value per unit of the asset
    pub imv: u128,
    /// Circulating supply of the asset, must not exceed `total_supply`
    pub circulating: u128,
    /// Total issued supply of the asset
    pub total_supply: u128,
    /// Normalized volatility, 1.0 is the baseline
    pub volatility: u128,
    /// Sensitivity of the supply ratio adjustment
    pub kr: u128,
    /// Sensitivity of the volatility adjustment
    pub kv: u128,
}
