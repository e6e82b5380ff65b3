use crate::error::{ApiError, ApiResult};
use bakery_service::{BakeryPatch, NewBakedGood};
use serde::Deserialize;

/// Raw `POST /baked_goods` form. Every field arrives as optional text so that
/// missing or malformed values surface as validation errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

impl TryFrom<BakedGoodForm> for NewBakedGood {
    type Error = ApiError;

    fn try_from(form: BakedGoodForm) -> ApiResult<Self> {
        let name = match form.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ApiError::validation("name is required.")),
        };

        let price = form
            .price
            .ok_or_else(|| ApiError::validation("price is required."))?;
        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| ApiError::validation("price must be a number."))?;
        if !price.is_finite() || price < 0.0 {
            return Err(ApiError::validation("price must be a non-negative number."));
        }

        let bakery_id = match form.bakery_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(id) => Some(
                id.parse()
                    .map_err(|_| ApiError::validation("bakery_id must be an integer."))?,
            ),
        };

        Ok(NewBakedGood {
            name,
            price,
            bakery_id,
        })
    }
}

/// Builds a patch from submitted `PATCH /bakeries/{id}` pairs. Only `name` may
/// be changed; any other key is rejected.
pub fn bakery_patch(fields: &[(String, String)]) -> ApiResult<BakeryPatch> {
    let mut patch = BakeryPatch::default();

    for (key, value) in fields {
        match key.as_str() {
            "name" if value.trim().is_empty() => {
                return Err(ApiError::validation("name must not be blank."));
            }
            "name" => patch.name = Some(value.clone()),
            "id" | "created_at" => {
                return Err(ApiError::validation(format!(
                    "Field '{key}' cannot be changed."
                )));
            }
            _ => {
                return Err(ApiError::validation(format!(
                    "Unknown bakery field '{key}'."
                )));
            }
        }
    }

    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: Option<&str>, price: Option<&str>, bakery_id: Option<&str>) -> BakedGoodForm {
        BakedGoodForm {
            name: name.map(str::to_owned),
            price: price.map(str::to_owned),
            bakery_id: bakery_id.map(str::to_owned),
        }
    }

    fn message(result: ApiResult<impl std::fmt::Debug>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn accepts_a_full_form() {
        let baked_good = NewBakedGood::try_from(form(Some("Croissant"), Some("3.50"), Some("1")));

        assert_eq!(
            baked_good.unwrap(),
            NewBakedGood {
                name: "Croissant".to_owned(),
                price: 3.5,
                bakery_id: Some(1),
            }
        );
    }

    #[test]
    fn missing_or_empty_bakery_id_is_null() {
        let absent = NewBakedGood::try_from(form(Some("Scone"), Some("2"), None)).unwrap();
        let empty = NewBakedGood::try_from(form(Some("Scone"), Some("2"), Some(""))).unwrap();

        assert_eq!(absent.bakery_id, None);
        assert_eq!(empty.bakery_id, None);
    }

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            message(NewBakedGood::try_from(form(None, Some("1"), None))),
            "name is required."
        );
        assert_eq!(
            message(NewBakedGood::try_from(form(Some("  "), Some("1"), None))),
            "name is required."
        );
        assert_eq!(
            message(NewBakedGood::try_from(form(Some("Scone"), None, None))),
            "price is required."
        );
        assert_eq!(
            message(NewBakedGood::try_from(form(Some("Scone"), Some("cheap"), None))),
            "price must be a number."
        );
        assert_eq!(
            message(NewBakedGood::try_from(form(Some("Scone"), Some("-1"), None))),
            "price must be a non-negative number."
        );
        assert_eq!(
            message(NewBakedGood::try_from(form(Some("Scone"), Some("NaN"), None))),
            "price must be a non-negative number."
        );
        assert_eq!(
            message(NewBakedGood::try_from(form(Some("Scone"), Some("1"), Some("first")))),
            "bakery_id must be an integer."
        );
    }

    #[test]
    fn patch_allows_only_name() {
        let fields = vec![("name".to_owned(), "Harbour Bakery".to_owned())];
        assert_eq!(
            bakery_patch(&fields).unwrap(),
            BakeryPatch {
                name: Some("Harbour Bakery".to_owned()),
            }
        );

        assert_eq!(bakery_patch(&[]).unwrap(), BakeryPatch::default());

        let fields = vec![("id".to_owned(), "7".to_owned())];
        assert_eq!(message(bakery_patch(&fields)), "Field 'id' cannot be changed.");

        let fields = vec![
            ("name".to_owned(), "Harbour Bakery".to_owned()),
            ("owner".to_owned(), "Bob".to_owned()),
        ];
        assert_eq!(message(bakery_patch(&fields)), "Unknown bakery field 'owner'.");
    }
}
