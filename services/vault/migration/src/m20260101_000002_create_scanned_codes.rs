use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScannedCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScannedCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScannedCodes::Data).text().not_null())
                    .col(ColumnDef::new(ScannedCodes::Note).text().null())
                    .col(
                        ColumnDef::new(ScannedCodes::ScannedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust("char_length(data) > 0"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScannedCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ScannedCodes {
    Table,
    Id,
    Data,
    Note,
    ScannedAt,
}
