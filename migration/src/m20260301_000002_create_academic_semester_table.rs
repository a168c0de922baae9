use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicSemester::Table)
                    .if_not_exists()
                    .col(pk_uuid(AcademicSemester::Id))
                    .col(string(AcademicSemester::Title))
                    .col(integer(AcademicSemester::Year))
                    .col(string(AcademicSemester::Code))
                    .col(string(AcademicSemester::StartMonth))
                    .col(string(AcademicSemester::EndMonth))
                    .col(timestamp_with_time_zone(AcademicSemester::CreatedAt))
                    .col(timestamp_with_time_zone(AcademicSemester::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One semester per title and year
        manager
            .create_index(
                Index::create()
                    .name("idx_academic_semester_title_year")
                    .table(AcademicSemester::Table)
                    .col(AcademicSemester::Title)
                    .col(AcademicSemester::Year)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicSemester::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademicSemester {
    Table,
    Id,
    Title,
    Year,
    Code,
    StartMonth,
    EndMonth,
    CreatedAt,
    UpdatedAt,
}
