use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("window-quote").unwrap();
    cmd.env_remove("FENESTRA_CATALOG")
        .env_remove("FENESTRA_SETTINGS")
        .env("RUST_LOG", "warn");
    cmd
}

fn temp_path(name: &str, ext: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fenestra_cli_{}_{}.{}", name, std::process::id(), ext));
    let _ = std::fs::remove_file(&path);
    path
}

const SLIDING: [&str; 12] = [
    "--width", "2000", "--height", "1500", "--opening", "sliding", "--system", "sys-upvc-70",
    "--glass", "glass-4-16-4", "--leaves", "2",
];

#[test]
fn calculate_prints_json_result() {
    bin()
        .arg("calculate")
        .args(SLIDING)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"final_price\""))
        .stdout(predicate::str::contains("prof-pvc-f70"))
        // ~196 kg with 4-16-4 glazing, over the sliding kit's 120 kg limit
        .stdout(predicate::str::contains("hw-sliding-kit").not())
        .stdout(predicate::str::contains("hw-handle"));
}

#[test]
fn light_glazing_keeps_sliding_kit() {
    let mut args = SLIDING;
    args[9] = "glass-3-3-laminated";

    let output = bin().arg("calculate").args(args).arg("--json").output().unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let weight = result["weight"].as_f64().unwrap();
    assert!(weight < 120.0, "weight {}", weight);
    let ids: Vec<&str> = result["bom_items"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["item_type"] == "hardware")
        .filter_map(|item| item["item_id"].as_str())
        .collect();
    assert_eq!(ids, vec!["hw-sliding-kit", "hw-handle"]);
}

#[test]
fn calculate_prints_text_report() {
    bin()
        .arg("calculate")
        .args(SLIDING)
        .args(["--currency", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FINAL PRICE"))
        .stdout(predicate::str::contains("EUR"));
}

#[test]
fn unknown_system_fails_with_code() {
    bin()
        .args([
            "calculate", "--width", "1000", "--height", "1000", "--opening", "casement", "--system",
            "sys-missing", "--glass", "glass-4-12-4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SYSTEM_NOT_FOUND"));
}

#[test]
fn zero_width_is_rejected() {
    bin()
        .args([
            "calculate", "--width", "0", "--height", "1000", "--opening", "casement", "--system",
            "sys-alu-45", "--glass", "glass-4-12-4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_CONFIGURATION"));
}

#[test]
fn catalog_listings() {
    bin()
        .args(["catalog", "systems"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sys-wood-68"));

    bin()
        .args(["catalog", "profiles", "sys-alu-45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALU-M45"))
        .stdout(predicate::str::contains("PVC").not());

    bin()
        .args(["catalog", "hardware", "--opening", "awning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hw-awning-kit"))
        .stdout(predicate::str::contains("hw-sliding-kit").not());
}

#[test]
fn exported_catalog_can_be_loaded_back() {
    let path = temp_path("export", "json");
    bin().args(["catalog", "export"]).arg(&path).assert().success();

    bin()
        .arg("--catalog")
        .arg(&path)
        .args(["catalog", "glass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glass-triple"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn settings_override_changes_price() {
    let settings = temp_path("settings", "json");
    std::fs::write(&settings, r#"{ "margin_percent": 0.0, "labor_ratio": 0.0 }"#).unwrap();

    let output = bin()
        .arg("--settings")
        .arg(&settings)
        .arg("calculate")
        .args(SLIDING)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["final_price"], result["total_material_cost"]);

    let _ = std::fs::remove_file(&settings);
}

#[test]
fn project_lifecycle() {
    let path = temp_path("project", "fnq");

    bin()
        .args(["project", "new"])
        .arg(&path)
        .args(["--client", "Acme Homes"])
        .assert()
        .success();

    // Creating over an existing file is refused
    bin()
        .args(["project", "new"])
        .arg(&path)
        .args(["--client", "Other"])
        .assert()
        .failure();

    bin()
        .args(["project", "add"])
        .arg(&path)
        .args(["--label", "Living room"])
        .args(SLIDING)
        .args(["--user", "tester"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Living room"));

    bin()
        .args(["project", "show"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Homes"))
        .stdout(predicate::str::contains("1 window(s)"));

    let _ = std::fs::remove_file(&path);
}
