//! Catalog data layer for the Pustok bookstore.
//!
//! Entities live in [`domain`], their table mappings in [`models`] and
//! [`schema`]. All writes go through [`repository::unit_of_work::UnitOfWork`],
//! whose commits stamp audit timestamps on every auditable entity.

pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod schema;
