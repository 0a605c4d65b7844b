use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::id::CodeId;
use qrvault_schema::{generated_codes, scanned_codes};

use crate::domain::repository::{GeneratedCodeRepository, ScannedCodeRepository};
use crate::domain::types::{NewGeneratedCode, NewScannedCode};
use crate::error::VaultServiceError;

// ── Generated code repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGeneratedCodeRepository {
    pub db: DatabaseConnection,
}

impl GeneratedCodeRepository for DbGeneratedCodeRepository {
    async fn list(&self) -> Result<Vec<GeneratedCode>, VaultServiceError> {
        let models = generated_codes::Entity::find()
            .order_by_desc(generated_codes::Column::CreatedAt)
            .order_by_desc(generated_codes::Column::Id)
            .all(&self.db)
            .await
            .context("list generated codes")?;
        Ok(models.into_iter().map(generated_from_model).collect())
    }

    async fn create(&self, code: &NewGeneratedCode) -> Result<GeneratedCode, VaultServiceError> {
        let model = generated_codes::ActiveModel {
            id: Set(Uuid::now_v7()),
            data: Set(code.data.clone()),
            label: Set(code.label.clone()),
            foreground_color: Set(code.foreground_color.as_str().to_owned()),
            background_color: Set(code.background_color.as_str().to_owned()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create generated code")?;
        Ok(generated_from_model(model))
    }

    async fn update_label(
        &self,
        id: CodeId,
        label: Option<&str>,
    ) -> Result<Option<GeneratedCode>, VaultServiceError> {
        let updated = generated_codes::Entity::update_many()
            .col_expr(
                generated_codes::Column::Label,
                Expr::value(label.map(str::to_owned)),
            )
            .filter(generated_codes::Column::Id.eq(id.0))
            .exec_with_returning(&self.db)
            .await
            .context("update generated code label")?;
        Ok(updated.into_iter().next().map(generated_from_model))
    }
}

fn generated_from_model(model: generated_codes::Model) -> GeneratedCode {
    GeneratedCode {
        id: CodeId(model.id),
        data: model.data,
        label: model.label,
        foreground_color: model.foreground_color,
        background_color: model.background_color,
        created_at: model.created_at,
    }
}

// ── Scanned code repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbScannedCodeRepository {
    pub db: DatabaseConnection,
}

impl ScannedCodeRepository for DbScannedCodeRepository {
    async fn list(&self) -> Result<Vec<ScannedCode>, VaultServiceError> {
        let models = scanned_codes::Entity::find()
            .order_by_desc(scanned_codes::Column::ScannedAt)
            .order_by_desc(scanned_codes::Column::Id)
            .all(&self.db)
            .await
            .context("list scanned codes")?;
        Ok(models.into_iter().map(scanned_from_model).collect())
    }

    async fn create(&self, code: &NewScannedCode) -> Result<ScannedCode, VaultServiceError> {
        let model = scanned_codes::ActiveModel {
            id: Set(Uuid::now_v7()),
            data: Set(code.data.clone()),
            note: Set(code.note.clone()),
            scanned_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create scanned code")?;
        Ok(scanned_from_model(model))
    }

    async fn update_note(
        &self,
        id: CodeId,
        note: Option<&str>,
    ) -> Result<Option<ScannedCode>, VaultServiceError> {
        let updated = scanned_codes::Entity::update_many()
            .col_expr(
                scanned_codes::Column::Note,
                Expr::value(note.map(str::to_owned)),
            )
            .filter(scanned_codes::Column::Id.eq(id.0))
            .exec_with_returning(&self.db)
            .await
            .context("update scanned code note")?;
        Ok(updated.into_iter().next().map(scanned_from_model))
    }
}

fn scanned_from_model(model: scanned_codes::Model) -> ScannedCode {
    ScannedCode {
        id: CodeId(model.id),
        data: model.data,
        note: model.note,
        scanned_at: model.scanned_at,
    }
}
