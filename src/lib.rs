//! # Rollcall
//!
//! An in-memory groups and members REST API built around a generic
//! filter, sort and pagination query engine.
//!
//! ## Features
//!
//! - **Field tables**: every record type declares its logical fields once
//!   with [`impl_record!`], giving name-based access without reflection
//! - **Query engine**: `filter=name::eng.*|id::4` regex filters, multi-key
//!   `sort=-id|name` sorting and `page`/`limit` slicing over any [`Record`](core::Record)
//! - **Record store**: thread-safe in-memory groups with per-group member
//!   partitions and monotonic id counters
//! - **REST exposure**: axum routes under a configurable base path
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rollcall::prelude::*;
//!
//! let service = InMemoryGroupService::new();
//! service.save(Group::new("Engineering", "builds things")).await?;
//!
//! ServerBuilder::new()
//!     .with_config(AppConfig::default())
//!     .with_service(service)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod query;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::Record,
        error::{
            ConfigError, EntityError, QueryError, RequestError, RollcallError, StorageError,
        },
        field::{FieldKind, FieldTable, FieldValue},
        service::GroupService,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{Group, Member};

    // === Query Engine ===
    pub use crate::query::{
        Direction, FilterSpec, PageSpec, QueryParams, RecordQuery, SortKey, SortSpec,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryGroupService, seed_demo_data};

    // === Config ===
    pub use crate::config::{AppConfig, PaginationConfig, SeedConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
