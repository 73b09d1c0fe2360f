mod common;
use common::{TestFixture, line_ending};

use clipstash_testing::fixtures::text_item;

#[test]
fn all_displacing_an_explicit_type_warns_on_stderr() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "hello")]);

    let output = fixture
        .command()
        .arg("list")
        .arg("--all")
        .arg("--type")
        .arg("image")
        .output()
        .expect("run list");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning"));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "hello",
        "the explicit type must not filter anything once --all wins"
    );
}

#[test]
fn all_without_an_explicit_type_does_not_warn() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "hello")]);

    let output = fixture
        .command()
        .arg("list")
        .arg("--all")
        .output()
        .expect("run list");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn quiet_suppresses_the_override_warning() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "hello")]);

    let output = fixture
        .command()
        .arg("--quiet")
        .arg("list")
        .arg("--all")
        .arg("--type")
        .arg("image")
        .output()
        .expect("run list");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn reset_on_appends_the_sequence_to_every_record() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "hello"), text_item(2, "world")]);

    let output = fixture
        .command()
        .arg("list")
        .arg("--reset")
        .arg("on")
        .output()
        .expect("run list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        format!("hello\x1b[0m{}world\x1b[0m", line_ending())
    );
}

#[test]
fn auto_reset_never_fires_into_a_redirected_stream() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "\x1b[31mred")]);

    let output = fixture.command().arg("list").output().expect("run list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "\x1b[31mred");
}

#[test]
fn auto_reset_fires_when_emission_is_forced_on() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "\x1b[31mred"), text_item(2, "plain")]);

    let output = fixture
        .command()
        .arg("list")
        .arg("--ansi")
        .output()
        .expect("run list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        format!("\x1b[31mred\x1b[0m{}plain", line_ending())
    );
}

#[test]
fn configured_reset_mode_is_the_fallback_for_the_flag() {
    let fixture = TestFixture::new();
    fixture.write_history(&[text_item(1, "hello")]);
    std::fs::write(
        fixture.data().data_dir().join("config.toml"),
        "reset = \"on\"\n",
    )
    .expect("write config");

    let output = fixture.command().arg("list").output().expect("run list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "hello\x1b[0m");

    // An explicit flag still wins over the configured default.
    let output = fixture
        .command()
        .arg("list")
        .arg("--reset")
        .arg("off")
        .output()
        .expect("run list");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello");
}
