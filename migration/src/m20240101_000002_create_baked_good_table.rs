use super::m20240101_000001_create_bakery_table::Bakery;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BakedGood::Table)
                    .if_not_exists()
                    .col(pk_auto(BakedGood::Id))
                    .col(string(BakedGood::Name))
                    .col(double(BakedGood::Price))
                    .col(integer_null(BakedGood::BakeryId))
                    .col(
                        ColumnDef::new(BakedGood::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-baked_goods-bakery_id")
                            .from(BakedGood::Table, BakedGood::BakeryId)
                            .to(Bakery::Table, Bakery::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BakedGood::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BakedGood {
    #[sea_orm(iden = "baked_goods")]
    Table,
    Id,
    Name,
    Price,
    BakeryId,
    CreatedAt,
}
