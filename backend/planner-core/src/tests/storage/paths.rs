use crate::storage::paths::{PathSource, resolve_data_dir};

use std::path::Path;

#[test]
fn given_override_when_resolving_then_override_wins() {
    let resolved = resolve_data_dir(Some(Path::new("/tmp/planner-data"))).unwrap();

    assert_eq!(resolved.path, Path::new("/tmp/planner-data"));
    assert_eq!(resolved.source, PathSource::ConfigOverride);
}

#[test]
fn given_no_override_when_resolving_then_path_ends_with_app_dir() {
    // Environment dependent: only checked when a directory can be found.
    if let Ok(resolved) = resolve_data_dir(None) {
        assert!(resolved.path.ends_with(crate::APP_DIR_NAME));
        assert_ne!(resolved.source, PathSource::ConfigOverride);
    }
}
