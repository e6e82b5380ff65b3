use crate::{BakeryPatch, NewBakedGood, NewBakery};
use ::entity::{baked_good, bakery, prelude::*};
use sea_orm::*;

pub struct Mutation;

impl Mutation {
    pub async fn create_bakery(db: &DbConn, form_data: NewBakery) -> Result<bakery::Model, DbErr> {
        bakery::ActiveModel {
            name: Set(form_data.name),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// `bakery_id` is not checked here; a dangling reference fails in the store
    /// with a foreign-key violation.
    pub async fn create_baked_good(
        db: &DbConn,
        form_data: NewBakedGood,
    ) -> Result<baked_good::Model, DbErr> {
        let baked_good = baked_good::ActiveModel {
            name: Set(form_data.name),
            price: Set(form_data.price),
            bakery_id: Set(form_data.bakery_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::debug!(id = baked_good.id, "baked good created");
        Ok(baked_good)
    }

    /// Returns `Ok(None)` when no bakery has this id.
    pub async fn update_bakery_by_id(
        db: &DbConn,
        id: i32,
        patch: BakeryPatch,
    ) -> Result<Option<bakery::Model>, DbErr> {
        let Some(bakery) = Bakery::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(bakery));
        }

        let mut bakery: bakery::ActiveModel = bakery.into();
        if let Some(name) = patch.name {
            bakery.name = Set(name);
        }

        bakery.update(db).await.map(Some)
    }

    /// Returns the removed row, or `Ok(None)` when no baked good has this id.
    pub async fn delete_baked_good(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<baked_good::Model>, DbErr> {
        let Some(baked_good) = BakedGood::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let res = baked_good.clone().into_active_model().delete(db).await?;
        tracing::debug!(id, rows_affected = res.rows_affected, "baked good deleted");

        Ok(Some(baked_good))
    }
}
