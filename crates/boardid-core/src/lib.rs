//! Hardware catalog model and board identification engine.
//!
//! Resolves the identity of a connected or referenced hardware target
//! against a catalog of installed hardware definitions. Given a set of
//! identification properties reported at runtime (vendor/product
//! identifiers, serial-port descriptors), it returns every installed
//! board definition whose declared identification rules are fully
//! satisfied by those properties.
//!
//! # Architecture
//!
//! The catalog is a three-level tree:
//! - **Packages** — vendor-level groupings, the unit of install/upgrade
//! - **Platforms** — architecture groupings within a package
//! - **Boards** — concrete hardware definitions with dotted-key
//!   configuration
//!
//! Identification is a pure read over an immutable catalog snapshot;
//! rebuilds happen by atomic swap through [`CatalogHandle`], never by
//! in-place mutation.

pub mod board;
pub mod catalog;
pub mod error;
pub mod identify;
pub mod loader;
pub mod properties;
pub mod reference;

// Re-exports for convenience.
pub use board::Board;
pub use catalog::{BoardIdentity, Catalog, CatalogHandle, InstalledBoard, Package, Platform};
pub use error::{CatalogError, Result};
pub use identify::identify;
pub use loader::{load_hardware_dirs, parse_boards_txt};
pub use properties::PropertyMap;
pub use reference::PlatformReference;
