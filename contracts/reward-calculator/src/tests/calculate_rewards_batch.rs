use reward_calculator_interface::types::error::Error;
use reward_calculator_interface::types::reward_params::RewardParams;
use soroban_sdk::{vec, Env, Vec};

use crate::constants::MAX_BATCH_SIZE;

use super::sut::{baseline_params, create_reward_calculator_contract, ONE};

#[test]
fn should_calculate_each_record_in_order() {
    let env = Env::default();
    let calculator = create_reward_calculator_contract(&env);

    let fully_circulating = RewardParams {
        circulating: 5 * ONE,
        ..baseline_params()
    };

    let rewards = calculator.calculate_rewards_batch(&vec![
        &env,
        baseline_params(),
        fully_circulating,
        baseline_params(),
    ]);

    assert_eq!(rewards, vec![&env, 41 * ONE, ONE, 41 * ONE]);
}

#[test]
fn should_match_single_calculation() {
    let env = Env::default();
    let calculator = create_reward_calculator_contract(&env);

    let params = RewardParams {
        eth_amount: 1_000_000 * ONE,
        imv: 3 * ONE,
        circulating: 7,
        total_supply: 9,
        volatility: 2 * ONE,
        kr: 5 * ONE,
        kv: 250_000_000_000_000_000,
    };

    let rewards = calculator.calculate_rewards_batch(&vec![&env, params]);

    assert_eq!(rewards.len(), 1);
    assert_eq!(
        rewards.get(0).unwrap(),
        calculator.calculate_rewards(&params)
    );
}

#[test]
fn should_return_empty_for_empty_batch() {
    let env = Env::default();
    let calculator = create_reward_calculator_contract(&env);

    let rewards = calculator.calculate_rewards_batch(&Vec::new(&env));

    assert!(rewards.is_empty());
}

#[test]
fn should_fail_whole_batch_on_invalid_record() {
    let env = Env::default();
    let calculator = create_reward_calculator_contract(&env);

    let invalid = RewardParams {
        circulating: 6 * ONE,
        ..baseline_params()
    };

    assert_eq!(
        calculator.try_calculate_rewards_batch(&vec![&env, baseline_params(), invalid]),
        Err(Ok(Error::InvalidSupplyRatio))
    );
}

#[test]
fn should_accept_max_batch_size() {
    let env = Env::default();
    env.budget().reset_unlimited();
    let calculator = create_reward_calculator_contract(&env);

    let mut batch = Vec::new(&env);
    for _ in 0..MAX_BATCH_SIZE {
        batch.push_back(baseline_params());
    }

    let rewards = calculator.calculate_rewards_batch(&batch);

    assert_eq!(rewards.len(), MAX_BATCH_SIZE);
    assert!(rewards.iter().all(|reward| reward == 41 * ONE));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_batch_too_large() {
    let env = Env::default();
    env.budget().reset_unlimited();
    let calculator = create_reward_calculator_contract(&env);

    let mut batch = Vec::new(&env);
    for _ in 0..=MAX_BATCH_SIZE {
        batch.push_back(baseline_params());
    }

    calculator.calculate_rewards_batch(&batch);
}
