use pendulum::agent::Agent;

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("pendulum-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn fresh_agent_evaluates_the_requested_number_of_episodes() {
    let dir = scratch_dir("eval");
    let mut agent = Agent::new("CartPole-v1", dir.join("absent.json")).unwrap();
    let rewards = agent.evaluate(5);
    assert_eq!(rewards.len(), 5);
    for reward in &rewards {
        assert!(reward.is_finite());
        assert!(*reward >= 1.0 && *reward <= 500.0, "reward out of bounds: {reward}");
    }
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unknown_task_names_are_fatal() {
    assert!(Agent::new("Acrobot-v1", "unused.json").is_err());
}

#[test]
fn cold_start_train_save_reload_evaluate() {
    let dir = scratch_dir("e2e");
    let model_path = dir.join("ppo_cartpole.json");
    assert!(!model_path.exists());

    // Cold start: a missing snapshot initializes a fresh policy.
    let mut agent = Agent::new("CartPole-v1", &model_path).unwrap();
    agent.train(100);
    agent.save_model(None).unwrap();
    assert!(model_path.exists(), "snapshot must exist after save");

    // A second agent at the same path reloads the trained policy.
    let mut reloaded = Agent::new("CartPole-v1", &model_path).unwrap();
    let rewards = reloaded.evaluate(3);
    assert_eq!(rewards.len(), 3);
    for reward in rewards {
        assert!((1.0..=500.0).contains(&reward), "reward out of bounds: {reward}");
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn mismatched_snapshots_are_rejected() {
    let dir = scratch_dir("mismatch");
    let path = dir.join("wrong_shape.json");
    ppo::Ppo::with_seed(3, 5, 0).save(&path).unwrap();
    assert!(Agent::new("CartPole-v1", &path).is_err());
    std::fs::remove_dir_all(&dir).ok();
}
