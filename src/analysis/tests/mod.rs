use crate::fetch::{DirectoryEntry, RawArtifacts, RepositoryMetadata};

mod classifier_tests;
mod signal_tests;

pub(crate) fn artifacts(package_json: Option<&str>, entries: &[&str]) -> RawArtifacts {
    RawArtifacts {
        metadata: RepositoryMetadata {
            name: "widget".to_string(),
            ..Default::default()
        },
        entries: entries
            .iter()
            .map(|name| {
                if name.contains('.') {
                    DirectoryEntry::file(name)
                } else {
                    DirectoryEntry::dir(name)
                }
            })
            .collect(),
        languages: Vec::new(),
        files: package_json
            .map(|content| vec![("package.json".to_string(), content.to_string())])
            .unwrap_or_default(),
    }
}
