//! Core module containing the record abstraction, errors and the service trait

pub mod entity;
pub mod error;
pub mod field;
pub mod service;

pub use entity::Record;
pub use error::{
    ConfigError, EntityError, ErrorResponse, QueryError, RequestError, RollcallError,
    StorageError,
};
pub use field::{FieldAccessor, FieldKind, FieldTable, FieldValue};
pub use service::GroupService;
