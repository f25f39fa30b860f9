//! Filesystem catalog loader.
//!
//! Builds a [`Catalog`] from on-disk hardware directories. Layout:
//!
//! ```text
//! <hardware-root>/
//!   <packager>/
//!     <architecture>/
//!       boards.txt
//!       platform.txt      (optional)
//! ```
//!
//! `boards.txt` uses the dotted-key format; the first dotted segment of
//! each key is the board identifier. Remote index fetching, checksum
//! verification, and version resolution are out of scope: this loader
//! only reads definitions that are already installed.

use std::path::{Path, PathBuf};

use crate::board::Board;
use crate::catalog::{Catalog, Package, Platform};
use crate::error::{CatalogError, Result};
use crate::properties::PropertyMap;

/// Load a catalog from hardware directories, in the order given.
///
/// Roots that do not exist are skipped. Within a root, packager and
/// architecture directories are visited in lexical order so repeated
/// loads enumerate identically. A packager appearing under several
/// roots contributes to a single package, in first-seen position.
pub fn load_hardware_dirs(roots: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for root in roots {
        if !root.is_dir() {
            continue;
        }
        for (packager, package_dir) in sorted_dirs(root)? {
            let platforms = load_package_dir(&package_dir)?;
            if platforms.is_empty() {
                continue;
            }
            match catalog.packages.iter_mut().find(|p| p.name == packager) {
                Some(package) => package.platforms.extend(platforms),
                None => {
                    let mut package = Package::new(&packager);
                    package.platforms = platforms;
                    catalog.packages.push(package);
                }
            }
        }
    }
    Ok(catalog)
}

/// Load every platform under one packager directory.
fn load_package_dir(dir: &Path) -> Result<Vec<Platform>> {
    let mut platforms = Vec::new();
    for (architecture, platform_dir) in sorted_dirs(dir)? {
        if let Some(platform) = load_platform_dir(&architecture, &platform_dir)? {
            platforms.push(platform);
        }
    }
    Ok(platforms)
}

/// Load one platform directory; `None` if it carries no `boards.txt`.
fn load_platform_dir(architecture: &str, dir: &Path) -> Result<Option<Platform>> {
    let boards_path = dir.join("boards.txt");
    if !boards_path.is_file() {
        return Ok(None);
    }

    let mut platform = Platform::new(architecture);

    let boards_text = std::fs::read_to_string(&boards_path)?;
    platform.boards = parse_boards_txt(&boards_text).map_err(|e| definition_error(&boards_path, e))?;

    let platform_path = dir.join("platform.txt");
    if platform_path.is_file() {
        let text = std::fs::read_to_string(&platform_path)?;
        let props = PropertyMap::parse(&text).map_err(|e| definition_error(&platform_path, e))?;
        platform.name = props.get("name").map(str::to_string);
        if let Some(raw) = props.get("version") {
            let version = semver::Version::parse(raw).map_err(|e| CatalogError::InvalidDefinition {
                path: platform_path.clone(),
                detail: format!("version '{raw}': {e}"),
            })?;
            platform.version = Some(version);
        }
    }

    Ok(Some(platform))
}

/// Parse the boards definition format into boards, in declaration order.
///
/// A `menu` first-level block is platform-level menu metadata, not a
/// board. Every board must declare a `name` property.
pub fn parse_boards_txt(text: &str) -> Result<Vec<Board>> {
    let props = PropertyMap::parse(text)?;
    let mut boards = Vec::new();
    for board_id in props.first_level_keys() {
        if board_id == "menu" {
            continue;
        }
        let config = props.sub_tree(board_id);
        let Some(name) = config.get("name") else {
            return Err(CatalogError::MissingBoardName {
                board_id: board_id.to_string(),
            });
        };
        boards.push(Board::new(board_id, name, config.clone()));
    }
    Ok(boards)
}

fn definition_error(path: &Path, source: CatalogError) -> CatalogError {
    CatalogError::InvalidDefinition {
        path: path.to_path_buf(),
        detail: source.to_string(),
    }
}

/// Subdirectories of `dir` as `(name, path)` pairs in lexical order,
/// skipping hidden entries.
fn sorted_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        dirs.push((name, entry.path()));
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}
