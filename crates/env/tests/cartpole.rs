use env::{make, Env, EnvError};

#[test]
fn make_rejects_unknown_names() {
    let err = make("MountainCar-v0").unwrap_err();
    assert!(matches!(err, EnvError::UnknownEnvironment(ref name) if name == "MountainCar-v0"));
}

#[test]
fn reset_returns_small_initial_state() {
    let mut env = make("CartPole-v1").unwrap();
    let obs = env.reset();
    assert_eq!(obs.len(), env.obs_size());
    for v in obs {
        assert!(v.abs() <= 0.05, "initial state component out of band: {v}");
    }
}

#[test]
fn seeded_resets_are_reproducible() {
    let mut a = make("CartPole-v1").unwrap();
    let mut b = make("CartPole-v1").unwrap();
    a.seed(7);
    b.seed(7);
    assert_eq!(a.reset(), b.reset());
    assert_eq!(a.reset(), b.reset());
}

#[test]
fn pushing_right_accelerates_the_cart_right() {
    let mut env = make("CartPole-v1").unwrap();
    env.seed(0);
    env.reset();
    let step = env.step(1);
    assert!(step.obs[1] > 0.0, "cart velocity should turn positive");

    let mut env = make("CartPole-v1").unwrap();
    env.seed(0);
    env.reset();
    let step = env.step(0);
    assert!(step.obs[1] < 0.05, "pushing left must not accelerate right");
}

#[test]
fn constant_push_eventually_terminates() {
    let mut env = make("CartPole-v1").unwrap();
    env.seed(1);
    env.reset();
    for i in 0..500 {
        let step = env.step(1);
        if step.terminated {
            assert!(
                step.obs[0].abs() > 2.4 || step.obs[2].abs() > 0.209,
                "terminated without crossing a failure threshold"
            );
            assert!(!step.truncated);
            return;
        }
        assert!(!step.truncated, "truncated at step {i} before failing");
    }
    panic!("constant force should tip the pole within 500 steps");
}

#[test]
fn short_episodes_truncate_at_the_step_limit() {
    // Five steps is far too short for the pole to tip from reset noise, so
    // the episode must end by truncation exactly at the limit.
    let mut env = env::CartPole::with_step_limit(5);
    env.seed(3);
    env.reset();
    for i in 0..4 {
        let step = env.step(i % 2);
        assert!(!step.done(), "episode ended early at step {i}");
    }
    let last = env.step(0);
    assert!(last.truncated);
    assert!(!last.terminated);
}

#[test]
fn every_step_rewards_one() {
    let mut env = make("CartPole-v1").unwrap();
    env.reset();
    for i in 0..20 {
        let step = env.step(i % 2);
        assert_eq!(step.reward, 1.0);
        if step.done() {
            break;
        }
    }
}
