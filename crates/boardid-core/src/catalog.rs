//! The installed-hardware catalog: packages, platforms, and the
//! flattened board enumeration.
//!
//! A catalog is immutable once built. Rebuilds (after a package
//! install/uninstall/upgrade) produce a fresh catalog that replaces the
//! old one by atomic swap through [`CatalogHandle`]; readers holding a
//! snapshot keep a fully-consistent view for as long as they need it.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::board::Board;

/// A named architecture within a package (e.g. a chip family).
///
/// Identified by `(package name, architecture)`.
#[derive(Debug, Clone)]
pub struct Platform {
    /// Architecture name (e.g. `avr`).
    pub architecture: String,
    /// Human-readable platform name, when the definition declares one.
    pub name: Option<String>,
    /// Installed release version, when the definition declares one.
    pub version: Option<semver::Version>,
    /// Boards in declaration order.
    pub boards: Vec<Board>,
}

impl Platform {
    /// Create an empty platform for the given architecture.
    pub fn new(architecture: &str) -> Self {
        Platform {
            architecture: architecture.to_string(),
            name: None,
            version: None,
            boards: Vec::new(),
        }
    }
}

/// A vendor-level source of hardware support; the unit of
/// install/upgrade.
#[derive(Debug, Clone)]
pub struct Package {
    /// Packager/vendor name (e.g. `arduino`).
    pub name: String,
    /// Platforms in load order.
    pub platforms: Vec<Platform>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: &str) -> Self {
        Package {
            name: name.to_string(),
            platforms: Vec::new(),
        }
    }
}

/// A non-owning reference to one installed board, with its owning
/// platform and package.
#[derive(Debug, Clone, Copy)]
pub struct InstalledBoard<'c> {
    pub package: &'c Package,
    pub platform: &'c Platform,
    pub board: &'c Board,
}

impl InstalledBoard<'_> {
    /// The output-boundary identity record for this board.
    pub fn identity(&self) -> BoardIdentity {
        BoardIdentity {
            package: self.package.name.clone(),
            architecture: self.platform.architecture.clone(),
            board_id: self.board.board_id.clone(),
            name: self.board.name.clone(),
            selector: format!(
                "{}:{}:{}",
                self.package.name, self.platform.architecture, self.board.board_id
            ),
        }
    }
}

/// A fully-qualified board identity, as handed to disambiguation UIs or
/// a downstream build/upload pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardIdentity {
    /// Packager/vendor name.
    pub package: String,
    /// Platform architecture.
    pub architecture: String,
    /// Board identifier within the platform.
    pub board_id: String,
    /// Human-readable display name.
    pub name: String,
    /// `packager:architecture:board` selector string.
    pub selector: String,
}

/// The in-memory collection of all installed hardware definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Packages in load order.
    pub packages: Vec<Package>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Enumerate every installed board.
    ///
    /// Order is deterministic: packages in load order, platforms within
    /// a package in load order, boards within a platform in declaration
    /// order. This becomes the tie-break order of identification output
    /// when multiple boards match the same input. An empty catalog
    /// yields an empty sequence.
    pub fn installed_boards(&self) -> impl Iterator<Item = InstalledBoard<'_>> {
        self.packages.iter().flat_map(|package| {
            package.platforms.iter().flat_map(move |platform| {
                platform.boards.iter().map(move |board| InstalledBoard {
                    package,
                    platform,
                    board,
                })
            })
        })
    }

    /// Look up a package by name.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}

/// Shared holder of the current catalog snapshot.
///
/// Readers take cheap `Arc` snapshots; a rebuild swaps in a whole new
/// catalog. A reader either sees the old, fully-consistent catalog or
/// the new one, never a partially rebuilt one, and snapshots taken
/// before a swap stay valid until dropped.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    /// Create a handle over an initial catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogHandle {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current catalog snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically replace the catalog with a rebuilt one, returning the
    /// snapshot that was displaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}
