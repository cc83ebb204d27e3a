//! Migration: Create movies table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Movies::Id).uuid().not_null().primary_key())
                    // NULL for manually created movies; Postgres allows many NULLs under UNIQUE.
                    .col(ColumnDef::new(Movies::SwapiId).integer().null().unique_key())
                    .col(ColumnDef::new(Movies::Title).text().not_null())
                    .col(ColumnDef::new(Movies::EpisodeId).integer().null())
                    .col(ColumnDef::new(Movies::OpeningCrawl).text().null())
                    .col(ColumnDef::new(Movies::Director).text().null())
                    .col(ColumnDef::new(Movies::Producer).text().null())
                    .col(ColumnDef::new(Movies::ReleaseDate).date().null())
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_created_at")
                    .table(Movies::Table)
                    .col(Movies::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    SwapiId,
    Title,
    EpisodeId,
    OpeningCrawl,
    Director,
    Producer,
    ReleaseDate,
    CreatedAt,
    UpdatedAt,
}
