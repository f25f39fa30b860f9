//! `boardid identify` — resolve identification properties against the
//! installed catalog.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use boardid_core::{identify, load_hardware_dirs, BoardIdentity, PropertyMap};

/// Run `boardid identify -p vid.0=0x2341 -p pid.0=0x0043 [--props-file F]`.
///
/// Assembles the query from the properties file (if any) and the
/// repeated `-p` flags, flags overriding the file, then prints every
/// matching board. Zero matches is a valid outcome, not a failure.
pub fn run(
    hardware_dirs: &[PathBuf],
    props: &[String],
    props_file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut query = match props_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PropertyMap::parse(&content)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PropertyMap::new(),
    };
    merge_prop_flags(&mut query, props)?;

    if query.is_empty() {
        bail!("no identification properties given; pass -p key=value or --props-file");
    }

    let catalog = load_hardware_dirs(hardware_dirs)?;
    let identities: Vec<BoardIdentity> = identify(&catalog, &query)
        .iter()
        .map(|found| found.identity())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&identities)?);
        return Ok(());
    }

    if identities.is_empty() {
        eprintln!("no matching boards");
        return Ok(());
    }

    let width = identities.iter().map(|i| i.selector.len()).max().unwrap_or(0);
    for identity in &identities {
        println!("{:<width$}  {}", identity.selector, identity.name);
    }
    Ok(())
}

/// Fold repeated `key=value` flags into the query.
fn merge_prop_flags(query: &mut PropertyMap, props: &[String]) -> Result<()> {
    for pair in props {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid property '{pair}': expected key=value");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("invalid property '{pair}': empty key");
        }
        query.insert(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_parses_pairs_in_order() {
        let mut query = PropertyMap::new();
        merge_prop_flags(
            &mut query,
            &["vid.0=0x2341".to_string(), "pid.0=0x0043".to_string()],
        )
        .unwrap();
        assert_eq!(query.get("vid.0"), Some("0x2341"));
        assert_eq!(query.get("pid.0"), Some("0x0043"));
    }

    #[test]
    fn flags_override_earlier_values() {
        let mut query = PropertyMap::new();
        query.insert("vid.0", "0x0000");
        merge_prop_flags(&mut query, &["vid.0=0x2341".to_string()]).unwrap();
        assert_eq!(query.get("vid.0"), Some("0x2341"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn value_may_contain_equals() {
        let mut query = PropertyMap::new();
        merge_prop_flags(&mut query, &["note=a=b".to_string()]).unwrap();
        assert_eq!(query.get("note"), Some("a=b"));
    }

    #[test]
    fn reject_flag_without_equals() {
        let mut query = PropertyMap::new();
        assert!(merge_prop_flags(&mut query, &["vid.0".to_string()]).is_err());
        assert!(merge_prop_flags(&mut query, &["=value".to_string()]).is_err());
    }
}
