mod prepare;

use bakery_service::{BakeryPatch, Mutation, NewBakedGood, Query};
use prepare::{baked_good, bakery, prepare_mock_db};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn main() {
    let db = &prepare_mock_db();

    {
        let found = Query::find_bakery_by_id(db, 1).await.unwrap().unwrap();

        assert_eq!(found, bakery(1, "SeaSide Bakery"));
    }

    {
        let goods = Query::find_all_baked_goods(db).await.unwrap();

        assert_eq!(goods.len(), 2);
        assert_eq!(goods[1].name, "Pain au chocolat");
    }

    {
        let created = Mutation::create_baked_good(
            db,
            NewBakedGood {
                name: "Baguette".to_owned(),
                price: 2.75,
                bakery_id: Some(1),
            },
        )
        .await
        .unwrap();

        assert_eq!(created, baked_good(3, "Baguette", 2.75));
    }

    {
        let updated = Mutation::update_bakery_by_id(
            db,
            1,
            BakeryPatch {
                name: Some("Harbour Bakery".to_owned()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated, Some(bakery(1, "Harbour Bakery")));
    }

    {
        let missing = Mutation::update_bakery_by_id(
            db,
            9,
            BakeryPatch {
                name: Some("Nowhere".to_owned()),
            },
        )
        .await
        .unwrap();

        assert!(missing.is_none());
    }

    {
        let deleted = Mutation::delete_baked_good(db, 2).await.unwrap();

        assert_eq!(deleted, Some(baked_good(2, "Pain au chocolat", 4.25)));
    }

    {
        let missing = Mutation::delete_baked_good(db, 9).await.unwrap();

        assert!(missing.is_none());
    }
}
