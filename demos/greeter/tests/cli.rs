//! Runs the compiled `greeter` binary against scratch directories.

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::TempDir;

fn greeter(dir: &TempDir) -> Result<Command> {
    #[expect(
        deprecated,
        reason = "cargo_bin is the standard assert_cmd API for workspace binaries"
    )]
    let mut cmd = Command::cargo_bin("greeter").context("binary should exist")?;
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn greets_with_defaults_when_no_file_exists() -> Result<()> {
    let dir = TempDir::new()?;
    greeter(&dir)?.assert().success().stdout("Hello, World!\n");
    Ok(())
}

#[test]
fn file_values_sit_between_flags_and_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("greeter.conf"),
        "# demo\nName = \"Bob\"\ngreeting = Howdy\nmotd = Have a nice day\n",
    )?;
    greeter(&dir)?
        .assert()
        .success()
        .stdout("Howdy, Bob!\nHave a nice day\n");
    greeter(&dir)?
        .args(["-n", "Eve"])
        .assert()
        .success()
        .stdout("Howdy, Eve!\nHave a nice day\n");
    Ok(())
}

#[test]
fn dash_c_points_at_another_file() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("other.conf"), "name = Zed\nshout = yes\n")?;
    greeter(&dir)?
        .args(["-c", "other.conf"])
        .assert()
        .success()
        .stdout("HELLO, ZED!\n");
    Ok(())
}

#[test]
fn help_prints_usage_table() -> Result<()> {
    let dir = TempDir::new()?;
    let output = greeter(&dir)?.arg("-h").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("greeter: layered greetings"), "{stdout}");
    assert!(stdout.contains("  -n <name>"), "{stdout}");
    assert!(stdout.contains("  -c <cfgpath>"), "{stdout}");
    assert!(!stdout.contains("motd"), "{stdout}");
    Ok(())
}

#[test]
fn unknown_flag_exits_with_usage_code() -> Result<()> {
    let dir = TempDir::new()?;
    let output = greeter(&dir)?.arg("-x").output()?;
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("  -n <name>"), "{stdout}");
    Ok(())
}

#[test]
fn unreadable_file_exits_with_one() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("greeter.conf"), b"name = \xff\n")?;
    let output = greeter(&dir)?.output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("greeter.conf"), "{stderr}");
    assert!(output.stdout.is_empty());
    Ok(())
}
