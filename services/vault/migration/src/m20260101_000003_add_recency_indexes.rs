use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(GeneratedCodes::Table)
                    .col(GeneratedCodes::CreatedAt)
                    .name("idx_generated_codes_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(ScannedCodes::Table)
                    .col(ScannedCodes::ScannedAt)
                    .name("idx_scanned_codes_scanned_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_scanned_codes_scanned_at")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_generated_codes_created_at")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum GeneratedCodes {
    Table,
    CreatedAt,
}

#[derive(Iden)]
enum ScannedCodes {
    Table,
    ScannedAt,
}
