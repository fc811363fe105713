use soroban_sdk::contracttype;

/// Intermediate terms of a single reward calculation, 18 decimals each.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RewardBreakdown {
    /// circulating / total_supply, in [0, 1]
    pub scarcity_ratio: u128,
    /// kr * (1 - scarcity_ratio)
    pub supply_adjustment: u128,
    /// kv * volatility
    pub volatility_adjustment: u128,
    /// eth_amount * imv
    pub base_value: u128,
    /// 1 + supply_adjustment + volatility_adjustment
    pub multiplier: u128,
    /// base_value * multiplier
    pub reward: u128,
}
