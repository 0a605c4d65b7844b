use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeneratedCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GeneratedCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GeneratedCodes::Data).text().not_null())
                    .col(ColumnDef::new(GeneratedCodes::Label).text().null())
                    .col(
                        ColumnDef::new(GeneratedCodes::ForegroundColor)
                            .string_len(7)
                            .not_null()
                            .default("#000000"),
                    )
                    .col(
                        ColumnDef::new(GeneratedCodes::BackgroundColor)
                            .string_len(7)
                            .not_null()
                            .default("#FFFFFF"),
                    )
                    .col(
                        ColumnDef::new(GeneratedCodes::CreatedAt)
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
            .drop_table(Table::drop().table(GeneratedCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GeneratedCodes {
    Table,
    Id,
    Data,
    Label,
    ForegroundColor,
    BackgroundColor,
    CreatedAt,
}
