use entity::{baked_good, bakery, prelude::*};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_DATA: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.5)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 3.0)],
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (bakery_name, goods) in SEED_DATA {
            let bakery = bakery::ActiveModel {
                name: Set(ToString::to_string(bakery_name)),
                ..Default::default()
            }
            .insert(db)
            .await?;

            for (name, price) in goods.iter() {
                baked_good::ActiveModel {
                    name: Set(ToString::to_string(name)),
                    price: Set(*price),
                    bakery_id: Set(Some(bakery.id)),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        println!("Bakeries seeded successfully.");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let names: Vec<&str> = SEED_DATA.iter().map(|(name, _)| *name).collect();
        let bakery_ids: Vec<i32> = Bakery::find()
            .filter(bakery::Column::Name.is_in(names))
            .all(db)
            .await?
            .into_iter()
            .map(|bakery| bakery.id)
            .collect();

        BakedGood::delete_many()
            .filter(baked_good::Column::BakeryId.is_in(bakery_ids.clone()))
            .exec(db)
            .await?;
        Bakery::delete_many()
            .filter(bakery::Column::Id.is_in(bakery_ids))
            .exec(db)
            .await?;

        println!("Seeded bakeries removed.");
        Ok(())
    }
}
