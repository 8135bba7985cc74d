//! covgen IR - Type Model and Static Catalogs
//!
//! This crate contains the data model shared by every stage of the
//! container coverage generator:
//! - `ValueCatalog` mapping element types to representative literals
//! - `ContainerFamily` and `FamilyTable` describing each container template
//! - `TypeDescriptor`, one concrete (container, key?, element) instantiation
//! - `ContainerExpander`, the cross product of families and element types
//!
//! # Design Philosophy
//!
//! - **Configuration is data**: arity and shape are explicit family
//!   attributes, never inferred from a container's name.
//! - **Immutable tables**: `CoverageConfig` is built once and borrowed by
//!   every component.
//! - **Canonical identity**: descriptors compare and hash by their rendered
//!   type expression.

mod catalog;
mod config;
mod descriptor;
mod error;
mod expand;
mod family;

pub use catalog::{ValueCatalog, ValueCatalogBuilder, MIN_VALUES};
pub use config::CoverageConfig;
pub use descriptor::TypeDescriptor;
pub use error::{CoverageError, TypeKind};
pub use expand::ContainerExpander;
pub use family::{Arity, ContainerFamily, FamilyGroup, FamilyTable, Shape};
