//! Cargo.toml parsing: find manifest → package metadata + repository owner/name.
//!
//! Package fields may be inherited from `[workspace.package]` with
//! `field = { workspace = true }`; the workspace root is the nearest
//! ancestor manifest that declares `[workspace]`.

mod repository;

pub use repository::parse_repository_url;

use crate::debug;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "Cargo.toml";

/// Package metadata used by the block generators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    pub authors: Vec<String>,
    pub repository: String,
    pub homepage: Option<String>,
    pub documentation: Option<String>,
    /// Repository owner, derived from `repository`.
    pub username: String,
    /// Repository name without `.git`, derived from `repository`.
    pub repository_name: String,
}

impl ParsedManifest {
    /// First author with any `<email>` suffix removed.
    pub fn primary_author(&self) -> Option<&str> {
        self.authors
            .first()
            .map(|a| a.split('<').next().unwrap_or(a).trim())
            .filter(|a| !a.is_empty())
    }
}

// ============================================================================
// raw manifest shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct CargoToml {
    package: Option<Package>,
    workspace: Option<Workspace>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    version: Option<Inheritable<String>>,
    description: Option<Inheritable<String>>,
    license: Option<Inheritable<String>>,
    authors: Option<Inheritable<Vec<String>>>,
    repository: Option<Inheritable<String>>,
    homepage: Option<Inheritable<String>>,
    documentation: Option<Inheritable<String>>,
}

#[derive(Debug, Deserialize)]
struct Workspace {
    #[serde(default)]
    package: WorkspacePackage,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WorkspacePackage {
    version: Option<String>,
    description: Option<String>,
    license: Option<String>,
    authors: Option<Vec<String>>,
    repository: Option<String>,
    homepage: Option<String>,
    documentation: Option<String>,
}

/// A package field given inline or inherited from the workspace.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Inheritable<T> {
    Value(T),
    Workspace { workspace: bool },
}

impl<T: Clone> Inheritable<T> {
    const fn is_inherited(&self) -> bool {
        matches!(self, Self::Workspace { workspace: true })
    }

    fn resolve(&self, inherited: Option<&T>) -> Option<T> {
        match self {
            Self::Value(v) => Some(v.clone()),
            Self::Workspace { workspace: true } => inherited.cloned(),
            Self::Workspace { workspace: false } => None,
        }
    }
}

fn resolve<T: Clone>(field: Option<&Inheritable<T>>, inherited: Option<&T>) -> Option<T> {
    field.and_then(|f| f.resolve(inherited))
}

// ============================================================================
// parsing
// ============================================================================

/// Find `Cargo.toml` by walking up from `dir`.
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    let start = crate::utils::path::normalize_path(dir);
    start
        .ancestors()
        .map(|d| d.join(MANIFEST_FILE))
        .find(|candidate| candidate.is_file())
}

/// Find and parse the package manifest for `manifest_dir`.
pub fn parse(manifest_dir: &Path) -> Result<ParsedManifest> {
    let path = find_manifest(manifest_dir)
        .ok_or_else(|| Error::CargoTomlNotFound(manifest_dir.to_path_buf()))?;
    debug!("manifest"; "using {}", path.display());
    parse_file(&path)
}

/// Parse a specific `Cargo.toml` file.
pub fn parse_file(path: &Path) -> Result<ParsedManifest> {
    let content = fs::read_to_string(path)?;
    let toml = parse_toml(&content)?;

    let workspace = if needs_workspace(&toml) {
        find_workspace_package(path, &toml)?
    } else {
        WorkspacePackage::default()
    };

    build_manifest(toml, &workspace)
}

/// Parse `Cargo.toml` content without workspace inheritance.
pub fn parse_content(content: &str) -> Result<ParsedManifest> {
    let toml = parse_toml(content)?;
    build_manifest(toml, &WorkspacePackage::default())
}

fn parse_toml(content: &str) -> Result<CargoToml> {
    toml::from_str(content).map_err(|e| Error::CargoParse(e.to_string()))
}

fn needs_workspace(toml: &CargoToml) -> bool {
    let Some(p) = &toml.package else {
        return false;
    };
    p.version.as_ref().is_some_and(Inheritable::is_inherited)
        || p.description.as_ref().is_some_and(Inheritable::is_inherited)
        || p.license.as_ref().is_some_and(Inheritable::is_inherited)
        || p.authors.as_ref().is_some_and(Inheritable::is_inherited)
        || p.repository.as_ref().is_some_and(Inheritable::is_inherited)
        || p.homepage.as_ref().is_some_and(Inheritable::is_inherited)
        || p.documentation.as_ref().is_some_and(Inheritable::is_inherited)
}

/// Locate `[workspace.package]`: the manifest itself first, then ancestors.
fn find_workspace_package(manifest: &Path, own: &CargoToml) -> Result<WorkspacePackage> {
    if let Some(ws) = &own.workspace {
        return Ok(ws.package.clone());
    }

    let Some(parent) = manifest.parent().and_then(Path::parent) else {
        return Ok(WorkspacePackage::default());
    };

    for dir in parent.ancestors() {
        let candidate = dir.join(MANIFEST_FILE);
        if !candidate.is_file() {
            continue;
        }
        let content = fs::read_to_string(&candidate)?;
        let toml = parse_toml(&content)?;
        if let Some(ws) = toml.workspace {
            debug!("manifest"; "inheriting from {}", candidate.display());
            return Ok(ws.package);
        }
    }

    Ok(WorkspacePackage::default())
}

fn build_manifest(toml: CargoToml, ws: &WorkspacePackage) -> Result<ParsedManifest> {
    let package = toml
        .package
        .ok_or_else(|| Error::CargoParse("missing [package] section".into()))?;

    let repository = resolve(package.repository.as_ref(), ws.repository.as_ref())
        .ok_or_else(|| Error::CargoParse("missing `package.repository`".into()))?;
    let (username, repository_name) = parse_repository_url(&repository)?;

    Ok(ParsedManifest {
        name: package.name,
        version: resolve(package.version.as_ref(), ws.version.as_ref()).unwrap_or_default(),
        description: resolve(package.description.as_ref(), ws.description.as_ref())
            .unwrap_or_default(),
        license: resolve(package.license.as_ref(), ws.license.as_ref()).unwrap_or_default(),
        authors: resolve(package.authors.as_ref(), ws.authors.as_ref()).unwrap_or_default(),
        homepage: resolve(package.homepage.as_ref(), ws.homepage.as_ref()),
        documentation: resolve(package.documentation.as_ref(), ws.documentation.as_ref()),
        repository,
        username,
        repository_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_content() {
        let content = r#"
[package]
name = "automd-rs"
version = "0.2.0"
description = "Update README.md"
license = "MIT"
authors = ["YONGQI <yongqi@example.com>"]
repository = "https://github.com/betterhyq/automd-rs.git"
"#;
        let m = parse_content(content).unwrap();
        assert_eq!(m.name, "automd-rs");
        assert_eq!(m.version, "0.2.0");
        assert_eq!(m.license, "MIT");
        assert_eq!(m.repository, "https://github.com/betterhyq/automd-rs.git");
        assert_eq!(m.username, "betterhyq");
        assert_eq!(m.repository_name, "automd-rs");
        assert_eq!(m.primary_author(), Some("YONGQI"));
    }

    #[test]
    fn test_missing_package() {
        let err = parse_content("[workspace]\nmembers = []").unwrap_err();
        assert!(matches!(err, Error::CargoParse(_)));
    }

    #[test]
    fn test_missing_repository() {
        let err = parse_content("[package]\nname = \"x\"").unwrap_err();
        assert!(err.to_string().contains("package.repository"));
    }

    #[test]
    fn test_find_manifest_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"x\"\nrepository = \"https://github.com/a/b\"",
        )
        .unwrap();
        let nested = dir.path().join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        let m = parse(&nested).unwrap();
        assert_eq!(m.name, "x");
        assert_eq!(m.username, "a");
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        // tempdir parents normally have no Cargo.toml
        if find_manifest(dir.path()).is_none() {
            assert!(matches!(
                parse(dir.path()),
                Err(Error::CargoTomlNotFound(_))
            ));
        }
    }

    #[test]
    fn test_workspace_inheritance() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            r#"
[workspace]
members = ["crates/*"]

[workspace.package]
version = "1.2.3"
license = "MIT OR Apache-2.0"
repository = "https://github.com/org/mono"
"#,
        )
        .unwrap();
        let member = dir.path().join("crates/core");
        fs::create_dir_all(&member).unwrap();
        fs::write(
            member.join("Cargo.toml"),
            r#"
[package]
name = "mono-core"
version.workspace = true
license = { workspace = true }
repository.workspace = true
description = "core crate"
"#,
        )
        .unwrap();

        let m = parse(&member).unwrap();
        assert_eq!(m.name, "mono-core");
        assert_eq!(m.version, "1.2.3");
        assert_eq!(m.license, "MIT OR Apache-2.0");
        assert_eq!(m.description, "core crate");
        assert_eq!(m.username, "org");
        assert_eq!(m.repository_name, "mono");
    }
}
