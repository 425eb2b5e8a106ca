// tests/integration/listing.rs
use std::{fs, path::Path};

use dirsize_domain::{analytics::SortOrder, diagnostics::Diagnostic};
use dirsize_infra::{LocalFileSystem, SystemIdentity};
use dirsize_usecase::{BuildListing, ListingRequest, SizeAccumulator};
use tempfile::tempdir;

fn build(root: &Path, order: SortOrder) -> dirsize_domain::model::Listing {
    let fs = LocalFileSystem::new();
    let identity = SystemIdentity::new();
    BuildListing::new(&fs, &identity)
        .run(&ListingRequest { root: root.to_path_buf(), order })
        .expect("listing succeeds")
}

#[test]
fn nested_directories_are_summed() {
    let dir = tempdir().expect("temp dir");
    fs::create_dir_all(dir.path().join("tree/a/b/c")).unwrap();
    fs::write(dir.path().join("tree/top"), vec![0u8; 10]).unwrap();
    fs::write(dir.path().join("tree/a/one"), vec![0u8; 20]).unwrap();
    fs::write(dir.path().join("tree/a/b/c/deep"), vec![0u8; 30]).unwrap();
    fs::write(dir.path().join("tree/.hidden"), vec![0u8; 40]).unwrap();
    fs::write(dir.path().join("single"), vec![0u8; 5]).unwrap();

    let listing = build(dir.path(), SortOrder::Descending);

    let summary: Vec<_> = listing.entries.iter().map(|e| (e.name.as_str(), e.total_size.bytes())).collect();
    assert_eq!(summary, vec![("tree", 100), ("single", 5)]);
    assert!(listing.diagnostics.is_empty());
}

#[test]
fn equal_sizes_keep_directory_read_order() {
    let dir = tempdir().expect("temp dir");
    for name in ["x", "y", "z"] {
        fs::write(dir.path().join(name), b"same").unwrap();
    }
    let enumeration: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    let asc = build(dir.path(), SortOrder::Ascending);
    let desc = build(dir.path(), SortOrder::Descending);

    let names = |l: &dirsize_domain::model::Listing| l.entries.iter().map(|e| e.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&asc), enumeration);
    assert_eq!(names(&desc), enumeration);
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_not_traversed() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().expect("temp dir");
    fs::create_dir(dir.path().join("big")).unwrap();
    fs::write(dir.path().join("big/blob"), vec![0u8; 4096]).unwrap();
    fs::create_dir(dir.path().join("holder")).unwrap();
    symlink(dir.path().join("big"), dir.path().join("holder/link")).unwrap();

    let fs_port = LocalFileSystem::new();
    let report = SizeAccumulator::new(&fs_port).compute_total_size(&dir.path().join("holder"));
    assert_eq!(report.total.bytes(), 0);
    assert!(report.diagnostics.is_empty());
}

#[cfg(unix)]
#[test]
fn symlinks_inside_a_walk_count_only_regular_targets() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("real.bin"), vec![0u8; 300]).unwrap();
    fs::create_dir(dir.path().join("big")).unwrap();
    fs::write(dir.path().join("big/blob"), vec![0u8; 4096]).unwrap();

    let holder = dir.path().join("holder");
    fs::create_dir(&holder).unwrap();
    fs::write(holder.join("own"), vec![0u8; 10]).unwrap();
    symlink("../real.bin", holder.join("link")).unwrap();
    symlink("../big", holder.join("dir-link")).unwrap();
    symlink("../nowhere", holder.join("dangling")).unwrap();

    let fs_port = LocalFileSystem::new();
    let report = SizeAccumulator::new(&fs_port).compute_total_size(&holder);
    assert_eq!(report.total.bytes(), 310);
    assert!(report.diagnostics.is_empty());

    let listing = build(dir.path(), SortOrder::Descending);
    let holder_entry = listing.entries.iter().find(|e| e.name == "holder").expect("holder listed");
    assert_eq!(holder_entry.total_size.bytes(), 310);
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_yields_one_diagnostic() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("temp dir");
    let root = dir.path().join("data");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("secret"), vec![0u8; 500]).unwrap();
    fs::write(root.join("visible"), vec![0u8; 70]).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits are not enforced for privileged users.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let fs_port = LocalFileSystem::new();
    let report = SizeAccumulator::new(&fs_port).compute_total_size(&root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(report.total.bytes(), 70);
    assert_eq!(report.diagnostics.len(), 1);
    assert!(matches!(&report.diagnostics[0], Diagnostic::Inaccessible { path, .. } if path == &locked));
}
