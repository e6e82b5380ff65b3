use ::entity::{baked_good, bakery, prelude::*};
use sea_orm::*;

pub struct Query;

impl Query {
    pub async fn find_all_baked_goods(db: &DbConn) -> Result<Vec<baked_good::Model>, DbErr> {
        BakedGood::find()
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_baked_good_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<baked_good::Model>, DbErr> {
        BakedGood::find_by_id(id).one(db).await
    }

    pub async fn find_all_bakeries(db: &DbConn) -> Result<Vec<bakery::Model>, DbErr> {
        Bakery::find().order_by_asc(bakery::Column::Id).all(db).await
    }

    pub async fn find_bakery_by_id(db: &DbConn, id: i32) -> Result<Option<bakery::Model>, DbErr> {
        Bakery::find_by_id(id).one(db).await
    }
}
