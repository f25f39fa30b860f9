//! `boardid list` — enumerate installed boards.

use std::path::PathBuf;

use anyhow::Result;

use boardid_core::{load_hardware_dirs, BoardIdentity, PlatformReference};

/// Run `boardid list [PACKAGER:ARCH[@VERSION]]`.
///
/// Prints every installed board in catalog order, optionally restricted
/// to one platform reference.
pub fn run(hardware_dirs: &[PathBuf], reference: Option<&str>, json: bool) -> Result<()> {
    let filter = reference.map(PlatformReference::parse).transpose()?;

    let catalog = load_hardware_dirs(hardware_dirs)?;
    let identities: Vec<BoardIdentity> = catalog
        .installed_boards()
        .filter(|installed| match &filter {
            Some(r) => r.matches(&installed.package.name, installed.platform),
            None => true,
        })
        .map(|installed| installed.identity())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&identities)?);
        return Ok(());
    }

    if identities.is_empty() {
        eprintln!("no installed boards");
        return Ok(());
    }

    let width = identities.iter().map(|i| i.selector.len()).max().unwrap_or(0);
    for identity in &identities {
        println!("{:<width$}  {}", identity.selector, identity.name);
    }
    Ok(())
}
