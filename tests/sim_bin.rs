use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("1")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert_eq!(v["games"].as_array().map(Vec::len), Some(1));
}

#[test]
fn sim_binary_many_games() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["10", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert!(v["winner"].is_null());
    let wins = v["player_wins"].as_u64().unwrap() + v["opponent_wins"].as_u64().unwrap();
    assert_eq!(wins, 3);
}

#[test]
fn sim_binary_rejects_missing_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

#[test]
fn cli_reports_unsupported_board_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(["auto", "--seed", "1", "--size", "3"])
        .output()
        .expect("failed to run broadside binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported board size 3"), "{}", stderr);
}
