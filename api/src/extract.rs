use crate::error::{ApiError, ApiResult};
use axum::{
    body::Bytes,
    extract::{
        path::ErrorKind, rejection::PathRejection, FromRequest, FromRequestParts, Path, Request,
    },
    http::{header, request::Parts},
    Form,
};

/// `{id}` of `/bakeries/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BakeryId(pub i32);

/// `{id}` of `/baked_goods/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BakedGoodId(pub i32);

impl<S> FromRequestParts<S> for BakeryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_param(parts, state, ApiError::BakeryNotFound).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for BakedGoodId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_param(parts, state, ApiError::BakedGoodNotFound).await.map(Self)
    }
}

/// Digits too large for an `i32` are reported as `not_found`.
async fn id_param<S>(parts: &mut Parts, state: &S, not_found: ApiError) -> ApiResult<i32>
where
    S: Send + Sync,
{
    match Path::<i32>::from_request_parts(parts, state).await {
        Ok(Path(id)) => Ok(id),
        Err(PathRejection::FailedToDeserializePathParams(err)) if out_of_range(err.kind()) => {
            Err(not_found)
        }
        Err(rejection) => Err(rejection.into()),
    }
}

fn out_of_range(kind: &ErrorKind) -> bool {
    match kind {
        ErrorKind::ParseError { value, .. }
        | ErrorKind::ParseErrorAtKey { value, .. }
        | ErrorKind::ParseErrorAtIndex { value, .. } => is_unsigned_integer(value),
        _ => false,
    }
}

fn is_unsigned_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Submitted `PATCH /bakeries/{id}` pairs. A request with neither a body nor a
/// content type is an empty patch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchForm(pub Vec<(String, String)>);

impl<S> FromRequest<S> for PatchForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            return Ok(Self(fields));
        }

        let body = Bytes::from_request(req, state).await?;
        if body.is_empty() {
            Ok(Self::default())
        } else {
            Err(ApiError::validation(
                "Form requests must have `Content-Type: application/x-www-form-urlencoded`.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflowing_ids_are_unsigned_integers() {
        assert!(is_unsigned_integer("99999999999"));
        assert!(!is_unsigned_integer(""));
        assert!(!is_unsigned_integer("abc"));
        assert!(!is_unsigned_integer("1.5"));
    }
}
