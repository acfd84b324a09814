//! Stamps the build with a version and a short commit id for the page footer.
//!
//! `THEME_TOGGLE_VERSION` overrides the package version and
//! `THEME_TOGGLE_GIT_SHA` overrides the commit id. Without an override the
//! commit id comes from CI (`GITHUB_SHA`) or the local checkout.

use std::env;
use std::path::Path;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = override_var("THEME_TOGGLE_VERSION")
        .or_else(|| override_var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|| "unknown".into());

    let git_sha = override_var("THEME_TOGGLE_GIT_SHA")
        .or_else(|| override_var("GITHUB_SHA").map(|sha| short_sha(&sha)))
        .or_else(checkout_sha)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=THEME_TOGGLE_VERSION={version}");
    println!("cargo:rustc-env=THEME_TOGGLE_GIT_SHA={git_sha}");

    for var in ["THEME_TOGGLE_VERSION", "THEME_TOGGLE_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    // New commits change the checkout id
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
    }
}

/// Non-empty value of an environment variable
fn override_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn short_sha(sha: &str) -> String {
    sha.trim().chars().take(SHORT_SHA_LEN).collect()
}

fn checkout_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(short_sha(&sha)).filter(|s| !s.is_empty())
}
