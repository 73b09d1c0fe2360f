mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn bare_invocation_shows_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands"))
        .stdout(predicate::str::contains("clipstash list"));
}

#[test]
fn help_lists_the_subcommands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("current"));
}

#[test]
fn version_flag_works() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipstash"));
}
