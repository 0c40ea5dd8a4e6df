use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::CvId).uuid().not_null())
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Position)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::FromDate).date().not_null())
                    .col(ColumnDef::new(Experiences::ToDate).date())
                    .col(ColumnDef::new(Experiences::Description).text())
                    // FK → cvs
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiences_cv_id")
                            .from(Experiences::Table, Experiences::CvId)
                            .to(Cvs::Table, Cvs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all experiences of a CV
        manager
            .create_index(
                Index::create()
                    .name("idx_experiences_cv_id")
                    .table(Experiences::Table)
                    .col(Experiences::CvId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    CvId,
    Company,
    Position,
    FromDate,
    ToDate,
    Description,
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
}
