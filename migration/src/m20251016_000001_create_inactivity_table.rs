use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inactivity::Table)
                    .if_not_exists()
                    .col(string(Inactivity::MemberId).primary_key())
                    .col(string(Inactivity::GuildId))
                    .col(timestamp_with_time_zone_null(Inactivity::LastSeen))
                    .col(boolean(Inactivity::RoleAdded).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inactivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Inactivity {
    Table,
    MemberId,
    GuildId,
    LastSeen,
    RoleAdded,
}
