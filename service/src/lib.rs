mod form;
mod mutation;
mod query;

pub use form::*;
pub use mutation::*;
pub use query::*;

pub use sea_orm;
