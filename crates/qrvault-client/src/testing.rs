use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use uuid::Uuid;

use qrvault_domain::action::{ActionError, ActionState, FieldErrors};
use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::id::CodeId;

use crate::api::{CreateGeneratedRequest, CreateScannedRequest, VaultApi};
use crate::error::ClientError;

/// In-memory stand-in for the vault service that records every call.
#[derive(Default)]
pub struct MockApi {
    generated: Mutex<Vec<GeneratedCode>>,
    scanned: Mutex<Vec<ScannedCode>>,
    fail_lists: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new(generated: Vec<GeneratedCode>, scanned: Vec<ScannedCode>) -> Self {
        Self {
            generated: Mutex::new(generated),
            scanned: Mutex::new(scanned),
            ..Default::default()
        }
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_owned());
    }

    fn check_lists(&self) -> Result<(), ClientError> {
        self.record("list");
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 500,
                message: "Failed to fetch generated codes".into(),
            });
        }
        Ok(())
    }
}

impl VaultApi for MockApi {
    async fn list_generated(&self) -> Result<Vec<GeneratedCode>, ClientError> {
        self.check_lists()?;
        Ok(self.generated.lock().unwrap().clone())
    }

    async fn list_scanned(&self) -> Result<Vec<ScannedCode>, ClientError> {
        self.check_lists()?;
        Ok(self.scanned.lock().unwrap().clone())
    }

    async fn create_generated(
        &self,
        request: &CreateGeneratedRequest,
    ) -> Result<ActionState, ClientError> {
        self.record("create_generated");
        let mut code = generated(&request.data, request.label.as_deref());
        code.foreground_color = request.foreground_color.clone();
        code.background_color = request.background_color.clone();
        self.generated.lock().unwrap().insert(0, code);
        Ok(ActionState::succeeded("QR Code created successfully!"))
    }

    async fn create_scanned(
        &self,
        request: &CreateScannedRequest,
    ) -> Result<ActionState, ClientError> {
        self.record("create_scanned");
        if request.data.is_empty() {
            let mut fields = FieldErrors::new();
            fields.insert("data".into(), vec!["Scanned data cannot be empty.".into()]);
            return Ok(ActionState::failed(
                "Validation failed.",
                Some(ActionError::Fields(fields)),
            ));
        }
        let code = scanned(&request.data, request.note.as_deref());
        self.scanned.lock().unwrap().insert(0, code);
        Ok(ActionState::succeeded("Scan saved to history!"))
    }

    async fn update_label(&self, id: CodeId, label: &str) -> Result<ActionState, ClientError> {
        self.record("update_label");
        let mut codes = self.generated.lock().unwrap();
        Ok(match codes.iter_mut().find(|c| c.id == id) {
            Some(code) => {
                code.label = Some(label.to_owned()).filter(|l| !l.is_empty());
                ActionState::succeeded("Label updated successfully!")
            }
            None => ActionState::failed("Failed to update label.", None),
        })
    }

    async fn update_note(&self, id: CodeId, note: &str) -> Result<ActionState, ClientError> {
        self.record("update_note");
        let mut codes = self.scanned.lock().unwrap();
        Ok(match codes.iter_mut().find(|c| c.id == id) {
            Some(code) => {
                code.note = Some(note.to_owned()).filter(|n| !n.is_empty());
                ActionState::succeeded("Note updated successfully!")
            }
            None => ActionState::failed("Failed to update note.", None),
        })
    }
}

pub fn generated(data: &str, label: Option<&str>) -> GeneratedCode {
    GeneratedCode {
        id: CodeId(Uuid::now_v7()),
        data: data.to_owned(),
        label: label.map(str::to_owned),
        foreground_color: "#000000".into(),
        background_color: "#FFFFFF".into(),
        created_at: Utc::now(),
    }
}

pub fn scanned(data: &str, note: Option<&str>) -> ScannedCode {
    ScannedCode {
        id: CodeId(Uuid::now_v7()),
        data: data.to_owned(),
        note: note.map(str::to_owned),
        scanned_at: Utc::now(),
    }
}
