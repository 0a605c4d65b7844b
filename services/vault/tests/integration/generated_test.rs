use qrvault_server::domain::types::CreateGeneratedSubmission;
use qrvault_server::error::VaultServiceError;
use qrvault_server::infra::cache::MemoryListingCache;
use qrvault_server::usecase::generated::{
    CreateGeneratedCodeUseCase, ListGeneratedCodesUseCase, UpdateGeneratedLabelUseCase,
};

use crate::helpers::{MockGeneratedRepo, test_generated};

fn styled(data: &str, fg: &str, bg: &str) -> CreateGeneratedSubmission {
    CreateGeneratedSubmission {
        data: Some(data.into()),
        label: None,
        foreground_color: Some(fg.into()),
        background_color: Some(bg.into()),
    }
}

// ── Create then list ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_exactly_the_created_record() {
    let repo = MockGeneratedRepo::default();
    let cache = MemoryListingCache::new();

    let created = CreateGeneratedCodeUseCase {
        repo: repo.clone(),
        cache: cache.clone(),
    }
    .execute(styled("https://example.com", "#112233", "#ffffff"))
    .await
    .unwrap();

    let codes = ListGeneratedCodesUseCase { repo, cache }
        .execute()
        .await
        .unwrap();
    assert_eq!(codes, vec![created.clone()]);
    assert_eq!(created.data, "https://example.com");
    assert_eq!(created.foreground_color, "#112233");
    assert_eq!(created.background_color, "#ffffff");
}

#[tokio::test]
async fn should_keep_data_byte_for_byte() {
    let repo = MockGeneratedRepo::default();
    let created = CreateGeneratedCodeUseCase {
        repo,
        cache: MemoryListingCache::new(),
    }
    .execute(styled("  spaced\ttext  ", "#000000", "#FFFFFF"))
    .await
    .unwrap();
    assert_eq!(created.data, "  spaced\ttext  ");
}

#[tokio::test]
async fn should_insert_nothing_when_data_is_empty() {
    let repo = MockGeneratedRepo::default();
    let result = CreateGeneratedCodeUseCase {
        repo: repo.clone(),
        cache: MemoryListingCache::new(),
    }
    .execute(styled("", "#000000", "#FFFFFF"))
    .await;

    assert!(matches!(result, Err(VaultServiceError::Validation(_))));
    assert!(repo.codes.lock().unwrap().is_empty());
}

// ── Listing cache ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_identical_listings_without_writes() {
    let repo = MockGeneratedRepo::new(vec![
        test_generated("b", Some("second"), 1),
        test_generated("a", Some("first"), 2),
    ]);
    let usecase = ListGeneratedCodesUseCase {
        repo: repo.clone(),
        cache: MemoryListingCache::new(),
    };

    let first = usecase.execute().await.unwrap();
    let second = usecase.execute().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(repo.list_calls(), 1);
}

// ── Label update ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_change_only_the_label() {
    let original = test_generated("https://example.com", None, 5);
    let repo = MockGeneratedRepo::new(vec![original.clone()]);
    let cache = MemoryListingCache::new();

    UpdateGeneratedLabelUseCase {
        repo: repo.clone(),
        cache: cache.clone(),
    }
    .execute(&original.id.to_string(), Some("Portfolio".into()))
    .await
    .unwrap();

    let codes = ListGeneratedCodesUseCase { repo, cache }
        .execute()
        .await
        .unwrap();
    let updated = &codes[0];
    assert_eq!(updated.label.as_deref(), Some("Portfolio"));
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.data, original.data);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.foreground_color, original.foreground_color);
    assert_eq!(updated.background_color, original.background_color);
}

#[tokio::test]
async fn should_fail_cleanly_for_unknown_id() {
    let repo = MockGeneratedRepo::new(vec![test_generated("x", None, 0)]);
    let result = UpdateGeneratedLabelUseCase {
        repo,
        cache: MemoryListingCache::new(),
    }
    .execute("0190b5a4-0000-7000-8000-000000000000", Some("x".into()))
    .await;
    assert!(matches!(
        result,
        Err(VaultServiceError::GeneratedCodeNotFound)
    ));
}
