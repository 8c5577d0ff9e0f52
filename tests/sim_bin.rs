use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "--games", "3", "--seed", "1"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 3);
    let results = v["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    for result in results {
        assert!(result["winner"].is_string());
    }
    assert_eq!(
        v["player_wins"].as_u64().unwrap() + v["enemy_wins"].as_u64().unwrap(),
        3
    );
}
