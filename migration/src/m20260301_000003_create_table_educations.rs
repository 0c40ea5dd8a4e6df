use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Educations::CvId).uuid().not_null())
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Educations::Degree)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::FromDate).date().not_null())
                    .col(ColumnDef::new(Educations::ToDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_educations_cv_id")
                            .from(Educations::Table, Educations::CvId)
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
                    .name("idx_educations_cv_id")
                    .table(Educations::Table)
                    .col(Educations::CvId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    CvId,
    Institution,
    Degree,
    FromDate,
    ToDate,
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
}
