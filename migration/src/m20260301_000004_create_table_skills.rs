use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::CvId).uuid().not_null())
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    // Free text: no enumeration of levels is enforced
                    .col(ColumnDef::new(Skills::Level).string_len(50).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_cv_id")
                            .from(Skills::Table, Skills::CvId)
                            .to(Cvs::Table, Cvs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_skills_cv_id")
                    .table(Skills::Table)
                    .col(Skills::CvId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    CvId,
    Name,
    Level,
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
}
