//! Catalog entries as actor entities. Products are read-only once loaded.

pub mod entity;
