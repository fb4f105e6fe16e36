use std::cell::Cell;

use super::*;
use crate::state::test_helpers;

#[test]
fn existing_record_prefills_every_field() {
    let companion = test_helpers::dummy_companion("feynman", "scientists");
    let form = CompanionForm::new(Some(&companion));

    assert_eq!(form.mode(), FormMode::Edit);
    let values = form.values();
    assert_eq!(values.name, companion.name);
    assert_eq!(values.description, companion.description);
    assert_eq!(values.instructions, companion.instructions);
    assert_eq!(values.seed, companion.seed);
    assert_eq!(values.src, companion.src);
    assert_eq!(values.category_id.as_deref(), Some("scientists"));
}

#[test]
fn no_record_starts_blank_in_create_mode() {
    let form = CompanionForm::new(None);
    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.values(), &CompanionValues::empty());
    assert!(form.values().category_id.is_none());
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert!(!form.is_loading());
}

#[tokio::test]
async fn invalid_draft_blocks_submission() {
    let mut form = CompanionForm::new(None);
    let called = Cell::new(false);
    let called_ref = &called;

    let outcome = form
        .handle_submit(move |_| async move {
            called_ref.set(true);
            Ok::<(), String>(())
        })
        .await;

    assert!(!called.get(), "handler must not run for an invalid draft");
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected invalid outcome");
    };
    assert_eq!(errors.len(), 6);
    assert_eq!(form.errors(), &errors);
    assert_eq!(form.phase(), SubmitPhase::Idle);
}

#[tokio::test]
async fn short_instructions_block_submission_with_message() {
    let mut form = CompanionForm::new(None);
    form.set_values(test_helpers::valid_values());
    form.set_value(Field::Instructions, "too short");

    let outcome = form.handle_submit(|_| async { Ok::<(), String>(()) }).await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected invalid outcome");
    };
    assert_eq!(errors.get(Field::Instructions), Some("Instructions require at least 200 characters"));
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn valid_draft_reaches_handler_and_resolves() {
    let mut form = CompanionForm::new(None);
    form.set_values(test_helpers::valid_values());
    let seen = Cell::new(None);
    let seen_ref = &seen;

    let outcome = form
        .handle_submit(move |values| {
            seen_ref.set(Some(values));
            async { Ok::<(), String>(()) }
        })
        .await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(seen.take(), Some(test_helpers::valid_values()));
    assert_eq!(form.phase(), SubmitPhase::Resolved);
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn handler_error_is_reported_and_form_still_resolves() {
    let mut form = CompanionForm::new(None);
    form.set_values(test_helpers::valid_values());

    let outcome = form.handle_submit(|_| async { Err::<(), _>("backend down") }).await;

    assert_eq!(outcome, SubmitOutcome::Failed("backend down".into()));
    assert_eq!(form.phase(), SubmitPhase::Resolved);
}

#[test]
fn begin_submit_marks_form_loading_until_finished() {
    let mut form = CompanionForm::new(None);
    form.set_values(test_helpers::valid_values());

    let values = form.begin_submit().unwrap();
    assert_eq!(values, test_helpers::valid_values());
    assert!(form.is_loading());

    form.finish_submit();
    assert!(!form.is_loading());
    assert_eq!(form.phase(), SubmitPhase::Resolved);
}

#[test]
fn editing_a_field_clears_its_error_only() {
    let mut form = CompanionForm::new(None);
    assert!(form.begin_submit().is_err());

    form.set_value(Field::Name, "Ada Lovelace");
    assert_eq!(form.errors().get(Field::Name), None);
    assert_eq!(form.errors().get(Field::Description), Some("Description is required"));
}

#[test]
fn reset_restores_loaded_values() {
    let companion = test_helpers::dummy_companion("feynman", "scientists");
    let mut form = CompanionForm::new(Some(&companion));
    form.set_value(Field::Name, "Someone Else");
    form.set_value(Field::CategoryId, "games");

    form.reset();
    assert_eq!(form.values(), &CompanionValues::from(&companion));
    assert_eq!(form.phase(), SubmitPhase::Idle);
}
