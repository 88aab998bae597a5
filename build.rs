use std::env;
use std::process::Command;

/// Run a git command and return trimmed non-empty stdout.
fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8(out.stdout).ok()?;
    let s = s.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn main() {
    // Explicit env vars win (CI builds may not have a .git directory), then
    // git metadata, then a "dev" placeholder so env!() always resolves.
    println!("cargo:rerun-if-env-changed=APP_COMMIT");
    println!("cargo:rerun-if-env-changed=APP_COMMIT_MESSAGE");
    println!("cargo:rerun-if-env-changed=APP_COMMIT_HISTORY");

    let commit = env::var("APP_COMMIT")
        .ok()
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "dev".to_string());
    let message = env::var("APP_COMMIT_MESSAGE")
        .ok()
        .or_else(|| git(&["log", "-1", "--pretty=%s"]))
        .unwrap_or_default();
    let history = env::var("APP_COMMIT_HISTORY")
        .ok()
        .or_else(|| git(&["log", "-5", "--pretty=%h %s"]))
        .unwrap_or_default();

    // cargo: directives are line-based, so history lines are joined with the
    // unit separator and split again in the footer component.
    println!("cargo:rustc-env=APP_COMMIT={commit}");
    println!("cargo:rustc-env=APP_COMMIT_MESSAGE={message}");
    println!(
        "cargo:rustc-env=APP_COMMIT_HISTORY={}",
        history.replace('\n', "\u{1f}")
    );
}
