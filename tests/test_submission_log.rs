//! Submission log and service tests against mock and file-backed stores.

mod mocks;

use contact_form_validator::repositories::{JsonFileStore, SubmissionLog, SUBMISSIONS_KEY};
use contact_form_validator::services::{ContactFormService, ContactFormServiceImpl, SubmitOutcome};
use contact_form_validator::{ContactFormData, FormValidator, MemoryStore, StoreError};
use mocks::MockStore;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn valid_form(name: &str) -> ContactFormData {
    ContactFormData::new(name, format!("{}@example.com", name.to_lowercase()), "Hello there, friend")
}

#[test]
fn test_accepted_submissions_are_appended_in_order() {
    let store = MockStore::new();
    let service = ContactFormServiceImpl::new(FormValidator::new(), store.clone());

    for name in ["Ada", "Grace", "Linus"] {
        assert!(service.submit(valid_form(name)).unwrap().is_accepted());
    }

    let submissions = service.submissions().unwrap();
    let ids: Vec<u64> = submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(submissions[2].data.name, "Linus");
    assert_eq!(store.get_call_count("set"), 3);
}

#[test]
fn test_rejected_submission_never_touches_store() {
    let store = MockStore::new();
    let service = ContactFormServiceImpl::new(FormValidator::new(), store.clone());

    let outcome = service
        .submit(ContactFormData::new("A", "bad", "short"))
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected(ref r) if r.errors().len() == 3));
    assert_eq!(store.get_call_count("get"), 0);
    assert_eq!(store.get_call_count("set"), 0);
    assert!(store.raw(SUBMISSIONS_KEY).is_none());
}

#[test]
fn test_write_failure_surfaces_as_error() {
    let store = MockStore::new();
    store.fail_writes(true);
    let service = ContactFormServiceImpl::new(FormValidator::new(), store.clone());

    let result = service.submit(valid_form("Ada"));
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert_eq!(service.metrics().store_errors_total(), 1);
    assert_eq!(service.metrics().submissions_recorded_total(), 0);

    store.fail_writes(false);
    let outcome = service.submit(valid_form("Ada")).unwrap();
    match outcome {
        SubmitOutcome::Accepted(submission) => assert_eq!(submission.id, 1),
        other => panic!("Expected acceptance, got: {:?}", other),
    }
}

#[test]
fn test_stored_value_is_json_array() {
    let store = MockStore::new();
    let log = SubmissionLog::new(store.clone());
    log.append(valid_form("Ada")).unwrap();

    let raw = store.raw(SUBMISSIONS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["data"]["name"], "Ada");
    assert!(entries[0]["submittedAt"].is_string());
}

#[test]
fn test_file_store_keeps_ids_increasing_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submissions.json");

    {
        let service = ContactFormServiceImpl::new(FormValidator::new(), JsonFileStore::new(&path));
        service.submit(valid_form("Ada")).unwrap();
        service.submit(valid_form("Grace")).unwrap();
    }

    let service = ContactFormServiceImpl::new(FormValidator::new(), JsonFileStore::new(&path));
    let outcome = service.submit(valid_form("Linus")).unwrap();
    match outcome {
        SubmitOutcome::Accepted(submission) => assert_eq!(submission.id, 3),
        other => panic!("Expected acceptance, got: {:?}", other),
    }
    assert_eq!(service.submissions().unwrap().len(), 3);
}

#[test]
fn test_clear_removes_key() {
    let store = MockStore::new();
    let log = SubmissionLog::new(store.clone());
    log.append(valid_form("Ada")).unwrap();

    log.clear().unwrap();
    assert!(store.raw(SUBMISSIONS_KEY).is_none());
    assert!(log.is_empty().unwrap());
}

#[test]
fn test_shared_service_records_every_concurrent_submission() {
    let service = Arc::new(ContactFormServiceImpl::new(FormValidator::new(), MemoryStore::new()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut ids = Vec::new();
                for i in 0..100 {
                    match service.submit(valid_form(&format!("Sender{}x{}", t, i))).unwrap() {
                        SubmitOutcome::Accepted(submission) => ids.push(submission.id),
                        other => panic!("Expected acceptance, got: {:?}", other),
                    }
                }
                ids
            })
        })
        .collect();

    let returned: HashSet<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(returned.len(), 400);

    let stored = service.submissions().unwrap();
    let stored_ids: Vec<u64> = stored.iter().map(|s| s.id).collect();
    assert_eq!(stored_ids, (1..=400).collect::<Vec<u64>>());
    assert_eq!(service.metrics().submissions_recorded_total(), 400);
}
