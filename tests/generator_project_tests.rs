use resgen::generator::{
    generate_resource, write_artifacts, ResourceOptions, TransportStyle, WriteOptions,
};
use std::fs;

#[test]
fn test_write_creates_nested_tree() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate_resource(&ResourceOptions::new("users")).unwrap();

    let summary = write_artifacts(dir.path(), &artifacts, WriteOptions::default()).unwrap();

    assert_eq!(summary.written.len(), 8);
    assert!(summary.skipped.is_empty());
    for artifact in &artifacts.artifacts {
        let on_disk = fs::read_to_string(dir.path().join(&artifact.path)).unwrap();
        assert_eq!(on_disk, artifact.content);
    }
    assert!(dir.path().join("users/dto").is_dir());
    assert!(dir.path().join("users/entities").is_dir());
}

#[test]
fn test_existing_files_are_skipped_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate_resource(&ResourceOptions::new("users")).unwrap();
    let service = dir.path().join("users/users.service.ts");
    fs::create_dir_all(service.parent().unwrap()).unwrap();
    fs::write(&service, "// hand edited\n").unwrap();

    let summary = write_artifacts(dir.path(), &artifacts, WriteOptions::default()).unwrap();

    assert_eq!(summary.skipped, vec![service.clone()]);
    assert_eq!(summary.written.len(), 7);
    assert_eq!(fs::read_to_string(&service).unwrap(), "// hand edited\n");
}

#[test]
fn test_force_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate_resource(&ResourceOptions::new("users")).unwrap();
    let service = dir.path().join("users/users.service.ts");
    fs::create_dir_all(service.parent().unwrap()).unwrap();
    fs::write(&service, "// hand edited\n").unwrap();

    let options = WriteOptions {
        force: true,
        ..WriteOptions::default()
    };
    let summary = write_artifacts(dir.path(), &artifacts, options).unwrap();

    assert!(summary.skipped.is_empty());
    assert_eq!(
        fs::read_to_string(&service).unwrap(),
        artifacts.get("users/users.service.ts").unwrap().content
    );
}

#[test]
fn test_dry_run_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate_resource(
        &ResourceOptions::new("orders").with_style(TransportStyle::TypedQuerySchemaFirst),
    )
    .unwrap();

    let options = WriteOptions {
        dry_run: true,
        ..WriteOptions::default()
    };
    let summary = write_artifacts(dir.path(), &artifacts, options).unwrap();

    assert_eq!(summary.written.len(), artifacts.len());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_flat_write_lands_in_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate_resource(
        &ResourceOptions::new("users")
            .with_style(TransportStyle::PushChannel)
            .with_flat(true)
            .with_crud(false),
    )
    .unwrap();

    write_artifacts(dir.path(), &artifacts, WriteOptions::default()).unwrap();

    assert!(dir.path().join("users.gateway.ts").is_file());
    assert!(dir.path().join("users.gateway.spec.ts").is_file());
    assert!(!dir.path().join("users").exists());
}
