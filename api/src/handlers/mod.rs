mod baked_goods;
mod bakeries;

pub use baked_goods::*;
pub use bakeries::*;

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}
