//! Tests for the configuration file reader.

use std::io::Write;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use tempfile::TempDir;

use super::helpers::parent_or_dot;
use super::parser::parse_line;
use super::{parse_config_str, read_config_file};
use crate::ConfigError;

fn write_config(dir: &TempDir, name: &str, contents: &[u8]) -> Result<Utf8PathBuf> {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name))
        .map_err(|p| anyhow::anyhow!("non UTF-8 temp path: {}", p.display()))?;
    let mut file = std::fs::File::create(&path).context("create config file")?;
    file.write_all(contents).context("write config file")?;
    Ok(path)
}

#[rstest]
#[case("port = 9090", Some(("port", "9090")))]
#[case("  Port=9090  ", Some(("port", "9090")))]
#[case("name = \"hello world\"", Some(("name", "hello world")))]
#[case("quote = a\"b\"c", Some(("quote", "abc")))]
#[case("url = http://x/?a=b", Some(("url", "http://x/?a=b")))]
#[case("empty =", Some(("empty", "")))]
#[case("# port = 1", None)]
#[case("#", None)]
#[case("BAD LINE NO EQUALS", None)]
#[case("", None)]
fn parse_line_cases(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
    let parsed = parse_line(line);
    assert_eq!(
        parsed.as_ref().map(|(k, v)| (k.as_str(), v.as_str())),
        expected
    );
}

#[test]
fn indented_hash_is_not_a_comment_but_lacks_equals() {
    let values = parse_config_str("  # comment\nBAD LINE NO EQUALS\nname = \"Bob\"\n");
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("name").map(String::as_str), Some("Bob"));
}

#[test]
fn indented_hash_with_equals_is_a_directive() {
    let values = parse_config_str("  # note = kept\n");
    assert_eq!(values.get("# note").map(String::as_str), Some("kept"));
}

#[test]
fn comments_and_malformed_lines_yield_nothing() {
    let values = parse_config_str("# one\n#two=2\nthree\n\n   \n");
    assert!(values.is_empty());
}

#[test]
fn last_duplicate_wins_across_case() {
    let values = parse_config_str("Foo = first\nfoo = second\nFOO = third\n");
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("foo").map(String::as_str), Some("third"));
}

#[test]
fn parsing_is_repeatable() {
    let text = "a = 1\nB = \"2\"\n# c = 3\nd\n";
    assert_eq!(parse_config_str(text), parse_config_str(text));
}

#[test]
fn reads_file_with_crlf_line_endings() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "app.conf", b"port = 9090\r\nname = Bob\r\n")?;
    let values = read_config_file(&path)?;
    assert_eq!(values.get("port").map(String::as_str), Some("9090"));
    assert_eq!(values.get("name").map(String::as_str), Some("Bob"));
    Ok(())
}

#[test]
fn missing_file_reports_open_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.conf"))
        .map_err(|p| anyhow::anyhow!("non UTF-8 temp path: {}", p.display()))?;
    let err = read_config_file(&path).expect_err("missing file must fail");
    match err {
        ConfigError::Open { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn invalid_utf8_reports_read_error_with_line() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "bad.conf", b"ok = 1\nbad = \xff\xfe\n")?;
    let err = read_config_file(&path).expect_err("invalid UTF-8 must fail");
    assert!(
        matches!(err, ConfigError::Read { line: 2, .. }),
        "unexpected error: {err:?}"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn follows_symlink_out_of_its_directory() -> Result<()> {
    let dir = TempDir::new()?;
    let target = write_config(&dir, "real.conf", b"port = 9090\n")?;
    std::fs::create_dir(dir.path().join("inner"))?;
    let link = Utf8PathBuf::from_path_buf(dir.path().join("inner").join("app.conf"))
        .map_err(|p| anyhow::anyhow!("non UTF-8 temp path: {}", p.display()))?;
    std::os::unix::fs::symlink(&target, &link).context("create symlink")?;
    let values = read_config_file(&link)?;
    assert_eq!(values.get("port").map(String::as_str), Some("9090"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn dangling_symlink_reports_open_error() -> Result<()> {
    let dir = TempDir::new()?;
    let link = Utf8PathBuf::from_path_buf(dir.path().join("app.conf"))
        .map_err(|p| anyhow::anyhow!("non UTF-8 temp path: {}", p.display()))?;
    std::os::unix::fs::symlink(dir.path().join("gone.conf"), &link)
        .context("create symlink")?;
    let err = read_config_file(&link).expect_err("dangling link must fail");
    assert!(matches!(err, ConfigError::Open { .. }), "{err:?}");
    Ok(())
}

#[rstest]
#[case("app.conf", ".")]
#[case("conf/app.conf", "conf")]
#[case("/etc/app.conf", "/etc")]
fn parent_or_dot_cases(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(parent_or_dot(Utf8Path::new(path)), Utf8Path::new(expected));
}
