//! Behaviour-driven coverage for terminology validation.
//!
//! Scenarios exercise whole-word matching, case folding, multi-word terms,
//! pattern warnings, and the built-in Quebec French map.

use lexique_common::{TerminologyMap, ValidationOutcome, validate, validate_element_text};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|stripped| stripped.strip_suffix('"'))
        .unwrap_or(value)
}

#[derive(Default)]
struct TerminologyWorld {
    map: RefCell<TerminologyMap>,
    outcome: RefCell<Option<ValidationOutcome>>,
}

impl TerminologyWorld {
    fn add_entry(&self, term: &str, suggestion: &str) {
        self.map
            .borrow_mut()
            .insert(term, suggestion)
            .unwrap_or_else(|error| panic!("terminology entry should be valid: {error}"));
    }

    fn use_builtin(&self) {
        *self.map.borrow_mut() = TerminologyMap::quebec_french();
    }

    fn store(&self, outcome: ValidationOutcome) {
        self.outcome.borrow_mut().replace(outcome);
    }

    fn outcome(&self) -> ValidationOutcome {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .unwrap_or_else(|| panic!("validation should have been performed"))
    }
}

#[fixture]
fn world() -> TerminologyWorld {
    TerminologyWorld::default()
}

#[given("the terminology entry {term} suggests {suggestion}")]
fn given_entry(world: &TerminologyWorld, term: String, suggestion: String) {
    world.add_entry(unquote(&term), unquote(&suggestion));
}

#[given("the built-in Quebec French terminology")]
fn given_builtin(world: &TerminologyWorld) {
    world.use_builtin();
}

#[when("I validate the text {text}")]
fn when_validate(world: &TerminologyWorld, text: String) {
    let outcome = validate(unquote(&text), &world.map.borrow());
    world.store(outcome);
}

#[when("I validate the element text {text}")]
fn when_validate_element(world: &TerminologyWorld, text: String) {
    let outcome = validate_element_text(unquote(&text), &world.map.borrow());
    world.store(outcome);
}

#[then("no violation is reported")]
fn then_clean(world: &TerminologyWorld) {
    let outcome = world.outcome();
    assert!(
        outcome.is_clean(),
        "unexpected violations: {:?}",
        outcome.violations
    );
}

#[then("exactly {count} violation is reported")]
fn then_count(world: &TerminologyWorld, count: usize) {
    assert_eq!(world.outcome().violations.len(), count);
}

#[then("exactly {count} violations are reported")]
fn then_count_plural(world: &TerminologyWorld, count: usize) {
    then_count(world, count);
}

#[then("the violation for {term} suggests {suggestion}")]
fn then_violation(world: &TerminologyWorld, term: String, suggestion: String) {
    let outcome = world.outcome();
    let term = unquote(&term);
    let found = outcome
        .violations
        .iter()
        .find(|violation| violation.term == term)
        .unwrap_or_else(|| panic!("expected a violation for `{term}`: {outcome:?}"));
    assert_eq!(found.suggestion, unquote(&suggestion));
}

#[then("{count} pattern warning is reported")]
fn then_warnings(world: &TerminologyWorld, count: usize) {
    assert_eq!(world.outcome().warnings.len(), count);
}

#[scenario(path = "tests/features/terminology.feature", index = 0)]
fn scenario_reports_term(world: TerminologyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/terminology.feature", index = 1)]
fn scenario_word_boundaries(world: TerminologyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/terminology.feature", index = 2)]
fn scenario_case_insensitive(world: TerminologyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/terminology.feature", index = 3)]
fn scenario_multi_word(world: TerminologyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/terminology.feature", index = 4)]
fn scenario_blank_entry(world: TerminologyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/terminology.feature", index = 5)]
fn scenario_builtin_element_text(world: TerminologyWorld) {
    let _ = world;
}
