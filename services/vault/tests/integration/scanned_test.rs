use qrvault_server::domain::types::CreateScannedSubmission;
use qrvault_server::domain::validation::SCANNED_DATA_REQUIRED;
use qrvault_server::error::VaultServiceError;
use qrvault_server::infra::cache::MemoryListingCache;
use qrvault_server::usecase::scanned::{
    CreateScannedCodeUseCase, ListScannedCodesUseCase, UpdateScannedNoteUseCase,
};

use crate::helpers::MockScannedRepo;

fn scan(data: &str) -> CreateScannedSubmission {
    CreateScannedSubmission {
        data: Some(data.into()),
        note: None,
    }
}

#[tokio::test]
async fn should_list_scans_most_recent_first() {
    let repo = MockScannedRepo::default();
    let cache = MemoryListingCache::new();
    let create = CreateScannedCodeUseCase {
        repo: repo.clone(),
        cache: cache.clone(),
    };
    create.execute(scan("first")).await.unwrap();
    create.execute(scan("second")).await.unwrap();

    let codes = ListScannedCodesUseCase { repo, cache }
        .execute()
        .await
        .unwrap();
    let data: Vec<_> = codes.iter().map(|c| c.data.as_str()).collect();
    assert_eq!(data, ["second", "first"]);
}

#[tokio::test]
async fn should_report_empty_scan_as_field_error() {
    let repo = MockScannedRepo::default();
    let result = CreateScannedCodeUseCase {
        repo: repo.clone(),
        cache: MemoryListingCache::new(),
    }
    .execute(scan(""))
    .await;

    let Err(VaultServiceError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(errors["data"], [SCANNED_DATA_REQUIRED]);
    assert!(repo.codes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_update_note_and_show_it_in_next_listing() {
    let repo = MockScannedRepo::default();
    let cache = MemoryListingCache::new();
    let created = CreateScannedCodeUseCase {
        repo: repo.clone(),
        cache: cache.clone(),
    }
    .execute(scan("MECARD:N:Doe,John;;"))
    .await
    .unwrap();
    let list = ListScannedCodesUseCase {
        repo: repo.clone(),
        cache: cache.clone(),
    };
    list.execute().await.unwrap();

    UpdateScannedNoteUseCase {
        repo: repo.clone(),
        cache: cache.clone(),
    }
    .execute(&created.id.to_string(), Some("card from conference".into()))
    .await
    .unwrap();

    let codes = list.execute().await.unwrap();
    assert_eq!(codes[0].note.as_deref(), Some("card from conference"));
    assert_eq!(codes[0].scanned_at, created.scanned_at);
}

#[tokio::test]
async fn should_fail_note_update_for_malformed_id() {
    let result = UpdateScannedNoteUseCase {
        repo: MockScannedRepo::default(),
        cache: MemoryListingCache::new(),
    }
    .execute("42", Some("x".into()))
    .await;
    assert!(matches!(result, Err(VaultServiceError::ScannedCodeNotFound)));
}
