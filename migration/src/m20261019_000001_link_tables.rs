//! users / urls / tags 三张表
//!
//! `users` is seeded with the anonymous creator, which the link store
//! resolves at construction time.

use sea_orm_migration::prelude::*;

use crate::ANONYMOUS_CREATOR;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(Users::Table)
            .columns([Users::Name])
            .values_panic([ANONYMOUS_CREATOR.into()])
            .to_owned();
        manager.exec_stmt(seed).await?;

        // uri 唯一约束是去重的最终保障
        manager
            .create_table(
                Table::create()
                    .table(Urls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Urls::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Urls::Uri).text().not_null().unique_key())
                    .col(ColumnDef::new(Urls::Owner).big_integer().not_null())
                    .col(
                        ColumnDef::new(Urls::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_urls_owner")
                            .from(Urls::Table, Urls::Owner)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::Tag).text().not_null())
                    .col(ColumnDef::new(Tags::Url).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tags_url")
                            .from(Tags::Table, Tags::Url)
                            .to(Urls::Table, Urls::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 标签云 / 按标签查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tags_tag")
                    .table(Tags::Table)
                    .col(Tags::Tag)
                    .to_owned(),
            )
            .await?;

        // 详情页按 url 取全部标签
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tags_url")
                    .table(Tags::Table)
                    .col(Tags::Url)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_tags_url").table(Tags::Table).to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_tags_tag").table(Tags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Urls::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Urls {
    Table,
    Id,
    Uri,
    Owner,
    Created,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Tag,
    Url,
}
