use ppo::Ppo;

#[test]
fn saved_and_reloaded_policies_predict_identically() {
    let policy = Ppo::with_seed(4, 2, 123);
    let path = std::env::temp_dir().join(format!("ppo-roundtrip-{}.json", std::process::id()));
    policy.save(&path).unwrap();
    let reloaded = Ppo::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(reloaded.obs_dim(), policy.obs_dim());
    assert_eq!(reloaded.act_dim(), policy.act_dim());

    let mut rng = fastrand::Rng::with_seed(123);
    for _ in 0..100 {
        let obs: Vec<f32> = (0..4).map(|_| rng.f32() * 4.8 - 2.4).collect();
        assert_eq!(policy.predict(&obs), reloaded.predict(&obs));
    }
}

#[test]
fn loading_a_missing_file_fails() {
    let path = std::env::temp_dir().join("ppo-does-not-exist.json");
    assert!(Ppo::load(&path).is_err());
}

#[test]
fn loading_garbage_fails() {
    let path = std::env::temp_dir().join(format!("ppo-garbage-{}.json", std::process::id()));
    std::fs::write(&path, b"not a policy").unwrap();
    let result = Ppo::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}
