use ::entity::{baked_good, bakery};
use chrono::{DateTime, Utc};
use sea_orm::*;

pub fn created_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub fn bakery(id: i32, name: &str) -> bakery::Model {
    bakery::Model {
        id,
        name: name.to_owned(),
        created_at: created_at(),
    }
}

pub fn baked_good(id: i32, name: &str, price: f64) -> baked_good::Model {
    baked_good::Model {
        id,
        name: name.to_owned(),
        price,
        bakery_id: Some(1),
        created_at: created_at(),
    }
}

/// Results are consumed in the order `mock.rs` issues its calls.
pub fn prepare_mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        // find_bakery_by_id(1)
        .append_query_results([vec![bakery(1, "SeaSide Bakery")]])
        // find_all_baked_goods
        .append_query_results([vec![
            baked_good(1, "Croissant", 3.5),
            baked_good(2, "Pain au chocolat", 4.25),
        ]])
        // create_baked_good, via INSERT .. RETURNING
        .append_query_results([vec![baked_good(3, "Baguette", 2.75)]])
        // update_bakery_by_id(1): lookup, then UPDATE .. RETURNING
        .append_query_results([
            vec![bakery(1, "SeaSide Bakery")],
            vec![bakery(1, "Harbour Bakery")],
        ])
        // update_bakery_by_id(9): lookup finds nothing
        .append_query_results([Vec::<bakery::Model>::new()])
        // delete_baked_good(2): lookup, then DELETE
        .append_query_results([vec![baked_good(2, "Pain au chocolat", 4.25)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        // delete_baked_good(9): lookup finds nothing
        .append_query_results([Vec::<baked_good::Model>::new()])
        .into_connection()
}
