use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .col(pk_uuid(Faq::Id))
                    .col(string_len(Faq::Iso, 3))
                    .col(boolean(Faq::Primary).default(false).to_owned())
                    .col(string(Faq::Question))
                    .col(string(Faq::Answer))
                    .col(integer(Faq::Order))
                    .col(timestamp_with_time_zone(Faq::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faq {
    Table,
    Id,
    Iso,
    Primary,
    Question,
    Answer,
    Order,
    LastUpdated,
}
