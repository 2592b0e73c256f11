//! `description` block: the package description.

use crate::log;
use crate::manifest::ParsedManifest;

pub fn generate(manifest: &ParsedManifest) -> Vec<String> {
    let description = manifest.description.trim();
    if description.is_empty() {
        log!("warning"; "`package.description` is empty, description block left blank");
        return Vec::new();
    }
    vec![String::new(), description.to_string(), String::new()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        let manifest = ParsedManifest {
            description: "Update README.md from Cargo.toml".into(),
            ..Default::default()
        };
        assert_eq!(
            generate(&manifest),
            vec!["", "Update README.md from Cargo.toml", ""]
        );
        assert!(generate(&ParsedManifest::default()).is_empty());
    }
}
