use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::id::CodeId;
use qrvault_server::domain::repository::{GeneratedCodeRepository, ScannedCodeRepository};
use qrvault_server::domain::types::{NewGeneratedCode, NewScannedCode};
use qrvault_server::error::VaultServiceError;

// ── MockGeneratedRepo ────────────────────────────────────────────────────────

/// In-memory generated codes, kept newest first like the database listing.
#[derive(Clone, Default)]
pub struct MockGeneratedRepo {
    pub codes: Arc<Mutex<Vec<GeneratedCode>>>,
    pub list_calls: Arc<Mutex<usize>>,
}

impl MockGeneratedRepo {
    pub fn new(codes: Vec<GeneratedCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

impl GeneratedCodeRepository for MockGeneratedRepo {
    async fn list(&self) -> Result<Vec<GeneratedCode>, VaultServiceError> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.codes.lock().unwrap().clone())
    }

    async fn create(&self, code: &NewGeneratedCode) -> Result<GeneratedCode, VaultServiceError> {
        let created = GeneratedCode {
            id: CodeId(Uuid::now_v7()),
            data: code.data.clone(),
            label: code.label.clone(),
            foreground_color: code.foreground_color.as_str().to_owned(),
            background_color: code.background_color.as_str().to_owned(),
            created_at: Utc::now(),
        };
        self.codes.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn update_label(
        &self,
        id: CodeId,
        label: Option<&str>,
    ) -> Result<Option<GeneratedCode>, VaultServiceError> {
        let mut codes = self.codes.lock().unwrap();
        Ok(codes.iter_mut().find(|c| c.id == id).map(|c| {
            c.label = label.map(str::to_owned);
            c.clone()
        }))
    }
}

// ── MockScannedRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockScannedRepo {
    pub codes: Arc<Mutex<Vec<ScannedCode>>>,
}

impl ScannedCodeRepository for MockScannedRepo {
    async fn list(&self) -> Result<Vec<ScannedCode>, VaultServiceError> {
        Ok(self.codes.lock().unwrap().clone())
    }

    async fn create(&self, code: &NewScannedCode) -> Result<ScannedCode, VaultServiceError> {
        let created = ScannedCode {
            id: CodeId(Uuid::now_v7()),
            data: code.data.clone(),
            note: code.note.clone(),
            scanned_at: Utc::now(),
        };
        self.codes.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn update_note(
        &self,
        id: CodeId,
        note: Option<&str>,
    ) -> Result<Option<ScannedCode>, VaultServiceError> {
        let mut codes = self.codes.lock().unwrap();
        Ok(codes.iter_mut().find(|c| c.id == id).map(|c| {
            c.note = note.map(str::to_owned);
            c.clone()
        }))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

/// A generated code created `minutes_ago` minutes in the past.
pub fn test_generated(data: &str, label: Option<&str>, minutes_ago: i64) -> GeneratedCode {
    GeneratedCode {
        id: CodeId(Uuid::now_v7()),
        data: data.to_owned(),
        label: label.map(str::to_owned),
        foreground_color: "#000000".into(),
        background_color: "#FFFFFF".into(),
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}
