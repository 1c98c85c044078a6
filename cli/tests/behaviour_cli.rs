//! End-to-end behaviour tests for the `lexique` binary.
//!
//! Each scenario runs the built binary inside a temporary project directory
//! and checks its exit status and output streams.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Ref, RefCell};
use std::convert::Infallible;
use std::fs;
use std::process::{Command, Output};
use std::str::FromStr;
use tempfile::TempDir;

/// Quoted step argument with `\n` and `\"` escapes expanded.
#[derive(Debug)]
struct StepText(String);

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let inner = trimmed
            .strip_prefix('"')
            .and_then(|stripped| stripped.strip_suffix('"'))
            .unwrap_or(trimmed);

        Ok(Self(inner.replace("\\n", "\n").replace("\\\"", "\"")))
    }
}

impl StepText {
    fn into_inner(self) -> String {
        self.0
    }
}

struct CliWorld {
    // Keep the project directory alive for the lifetime of the scenario.
    project: TempDir,
    environment: RefCell<Vec<(String, String)>>,
    output: RefCell<Option<Output>>,
}

impl CliWorld {
    fn write(&self, name: &str, contents: &str) {
        let path = self.project.path().join(name);
        fs::write(&path, contents)
            .unwrap_or_else(|error| panic!("failed to write {}: {error}", path.display()));
    }

    fn output(&self) -> Ref<'_, Output> {
        Ref::map(self.output.borrow(), |output| {
            output
                .as_ref()
                .unwrap_or_else(|| panic!("lexique should have been run"))
        })
    }
}

#[fixture]
fn cli_world() -> CliWorld {
    CliWorld {
        project: TempDir::new().unwrap_or_else(|error| panic!("temporary directory: {error}")),
        environment: RefCell::new(Vec::new()),
        output: RefCell::new(None),
    }
}

#[given("a base dictionary {name} containing {contents}")]
fn given_base_dictionary(cli_world: &CliWorld, name: StepText, contents: StepText) {
    cli_world.write(&name.into_inner(), &contents.into_inner());
}

#[given("a target dictionary {name} containing {contents}")]
fn given_target_dictionary(cli_world: &CliWorld, name: StepText, contents: StepText) {
    cli_world.write(&name.into_inner(), &contents.into_inner());
}

#[given("a configuration file containing {contents}")]
fn given_configuration(cli_world: &CliWorld, contents: StepText) {
    cli_world.write("lexique.toml", &contents.into_inner());
}

#[given("the environment sets LEXIQUE_LOCALE to {locale}")]
fn given_environment_locale(cli_world: &CliWorld, locale: StepText) {
    cli_world
        .environment
        .borrow_mut()
        .push(("LEXIQUE_LOCALE".to_owned(), locale.into_inner()));
}

#[when("lexique is run with {arguments}")]
fn when_run(cli_world: &CliWorld, arguments: StepText) {
    let arguments = arguments.into_inner();
    let mut command = Command::new(env!("CARGO_BIN_EXE_lexique"));
    command
        .args(arguments.split_whitespace())
        .current_dir(cli_world.project.path())
        .env_remove("LEXIQUE_LOCALE")
        .env_remove("RUST_LOG");
    for (key, value) in cli_world.environment.borrow().iter() {
        command.env(key, value);
    }

    let output = command
        .output()
        .unwrap_or_else(|error| panic!("failed to run lexique: {error}"));
    cli_world.output.replace(Some(output));
}

#[then("the exit status is {code}")]
fn then_exit_status(cli_world: &CliWorld, code: i32) {
    let output = cli_world.output();
    assert_eq!(
        output.status.code(),
        Some(code),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

#[then("stdout contains {snippet}")]
fn then_stdout_contains(cli_world: &CliWorld, snippet: StepText) {
    let snippet = snippet.into_inner();
    let output = cli_world.output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&snippet), "expected `{snippet}` in stdout: {stdout}");
}

#[then("stderr contains {snippet}")]
fn then_stderr_contains(cli_world: &CliWorld, snippet: StepText) {
    let snippet = snippet.into_inner();
    let output = cli_world.output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&snippet), "expected `{snippet}` in stderr: {stderr}");
}

#[scenario(path = "tests/features/cli.feature", index = 0)]
fn scenario_complete_coverage(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 1)]
fn scenario_missing_keys(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 2)]
fn scenario_quebec_terms(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 3)]
fn scenario_literal_text(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 4)]
fn scenario_environment_locale(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 5)]
fn scenario_missing_dictionaries(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 6)]
fn scenario_configured_dictionaries(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 7)]
fn scenario_json_report(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", index = 8)]
fn scenario_unknown_option(cli_world: CliWorld) {
    let _ = cli_world;
}
