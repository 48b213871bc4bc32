use env::{Env, Step};
use ppo::{Ppo, PpoConfig};

/// One-state bandit: action 1 always pays, action 0 never does. Episodes
/// truncate after eight steps.
struct BanditEnv {
    elapsed: usize,
}

impl BanditEnv {
    fn new() -> Self {
        Self { elapsed: 0 }
    }
}

impl Env for BanditEnv {
    fn step(&mut self, action: usize) -> Step {
        self.elapsed += 1;
        Step {
            obs: vec![1.0],
            reward: if action == 1 { 1.0 } else { 0.0 },
            terminated: false,
            truncated: self.elapsed >= 8,
        }
    }

    fn reset(&mut self) -> Vec<f32> {
        self.elapsed = 0;
        vec![1.0]
    }

    fn obs_size(&self) -> usize {
        1
    }

    fn action_size(&self) -> usize {
        2
    }
}

fn fast_config() -> PpoConfig {
    PpoConfig {
        n_steps: 64,
        learning_rate: 0.01,
        ..PpoConfig::default()
    }
}

#[test]
fn learns_the_rewarded_bandit_arm() {
    let mut env = BanditEnv::new();
    let mut policy = Ppo::with_config(env.obs_size(), env.action_size(), fast_config(), 0);
    policy.learn(&mut env, 20_000);
    assert_eq!(policy.predict(&[1.0]), 1, "policy should prefer the paying arm");
}

#[test]
fn learning_zero_timesteps_is_a_noop() {
    let mut env = BanditEnv::new();
    let mut policy = Ppo::with_seed(env.obs_size(), env.action_size(), 42);

    let dir = std::env::temp_dir();
    let before = dir.join(format!("ppo-noop-before-{}.json", std::process::id()));
    let after = dir.join(format!("ppo-noop-after-{}.json", std::process::id()));

    policy.save(&before).unwrap();
    policy.learn(&mut env, 0);
    policy.save(&after).unwrap();

    let a = std::fs::read_to_string(&before).unwrap();
    let b = std::fs::read_to_string(&after).unwrap();
    std::fs::remove_file(&before).ok();
    std::fs::remove_file(&after).ok();
    assert_eq!(a, b, "zero-timestep training must not change the policy");
}

#[test]
fn predictions_stay_within_the_action_space() {
    let policy = Ppo::with_seed(4, 2, 9);
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..50 {
        let obs: Vec<f32> = (0..4).map(|_| rng.f32() * 2.0 - 1.0).collect();
        assert!(policy.predict(&obs) < 2);
    }
}

#[test]
#[ignore]
fn learns_to_balance_the_cart_pole() {
    let mut env = env::make("CartPole-v1").unwrap();
    env.seed(0);
    let mut policy = Ppo::with_config(env.obs_size(), env.action_size(), fast_config(), 0);
    policy.learn(&mut env, 60_000);

    let mut obs = env.reset();
    let mut survived = 0;
    for _ in 0..200 {
        let step = env.step(policy.predict(&obs));
        survived += 1;
        if step.done() {
            break;
        }
        obs = step.obs;
    }
    assert!(survived >= 150, "pole fell after {survived} steps");
}
