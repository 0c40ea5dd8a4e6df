use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create cvs table
        // =====================================================
        // Ids are generated by the service, so no DB-side default is needed
        // and the same migration runs on Postgres and SQLite.
        manager
            .create_table(
                Table::create()
                    .table(Cvs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cvs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cvs::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Cvs::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Cvs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Cvs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Email is globally unique; violations surface as conflicts.
        manager
            .create_index(
                Index::create()
                    .name("idx_cvs_email_unique")
                    .table(Cvs::Table)
                    .col(Cvs::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_cvs_email_unique")
                    .table(Cvs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cvs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
}
