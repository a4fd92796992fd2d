use std::process::Command;

use anyhow::{Context, Result};

/// `uoacal-common` is feature-tiered; every tier must build on its own.
const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // no features
    &["foundation"],
    &["platform"],
];

/// Check that all feature tiers compile and pass their tests.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} uoacal-common feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let label = if features.is_empty() { "none".to_string() } else { joined.clone() };

        println!(
            "\n[{}/{}] cargo test -p uoacal-common --no-default-features{}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            if features.is_empty() { String::new() } else { format!(" --features {joined}") }
        );

        let mut command = Command::new("cargo");
        command.args(["test", "-p", "uoacal-common", "--no-default-features"]);
        if !features.is_empty() {
            command.arg("--features").arg(&joined);
        }

        let status =
            command.status().with_context(|| format!("Failed to run cargo test for '{label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed");
        }

        println!("✅ Features '{label}' passed");
    }

    println!("\n✅ All {} feature combinations pass!", FEATURE_COMBINATIONS.len());

    Ok(())
}
