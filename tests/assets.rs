use pyqt_forge::{AppInfo, AppVersion, Error, PathSet, find_licenses, find_styles};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn package_paths(root: &Path) -> PathSet {
    let app = AppInfo::new("Notepad", root).unwrap();
    PathSet::resolve(&app)
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_styles_are_grouped_and_titled() {
    let temp = TempDir::new().unwrap();
    let styles = temp.path().join("styles");
    write(&styles.join("material/dark-blue/stylesheet.qss"), "QWidget {}");
    write(&styles.join("material/light/stylesheet.qss"), "QLabel {}");
    write(&styles.join("base/plain/stylesheet.qss"), "* {}");
    // Plain files and cache directories are not themes.
    write(&styles.join("material/readme.txt"), "ignore me");
    fs::create_dir_all(styles.join("material/qss-cache")).unwrap();

    let found = find_styles(&package_paths(temp.path())).unwrap();
    let groups: Vec<&String> = found.keys().collect();
    assert_eq!(groups, vec!["base", "material"]);

    let material: Vec<&str> = found["material"].iter().map(|s| s.name.as_str()).collect();
    assert_eq!(material, vec!["Material Dark Blue", "Material Light"]);
    assert_eq!(found["material"][0].stylesheet, "QWidget {}");
    assert_eq!(found["base"][0].name, "Base Plain");
}

#[test]
fn test_styles_missing_stylesheet_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("styles/material/broken")).unwrap();

    let err = find_styles(&package_paths(temp.path())).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_licenses_sorted_by_name() {
    let temp = TempDir::new().unwrap();
    let licenses = temp.path().join("licenses");
    write(
        &licenses.join("a.json"),
        r#"{"name": "Zlib", "content_file": "zlib.txt", "link": "https://zlib.net"}"#,
    );
    write(
        &licenses.join("b.json"),
        r#"{"name": "Apache-2.0", "content_file": "apache.txt"}"#,
    );
    write(&licenses.join("zlib.txt"), "zlib license text");
    write(&licenses.join("apache.txt"), "apache license text");
    write(&licenses.join("notes.md"), "not a descriptor");

    let found = find_licenses(&package_paths(temp.path())).unwrap();
    let names: Vec<&str> = found.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Apache-2.0", "Zlib"]);
    assert_eq!(found[0].content, "apache license text");
    assert_eq!(found[0].link, "");
    assert_eq!(found[1].link, "https://zlib.net");
}

#[test]
fn test_license_descriptor_missing_field_is_fatal() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("licenses/bad.json"),
        r#"{"name": "MIT"}"#,
    );

    let err = find_licenses(&package_paths(temp.path())).unwrap_err();
    assert!(matches!(err, Error::LicenseMeta { .. }));
}

#[test]
fn test_license_descriptor_invalid_json_is_fatal() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("licenses/bad.json"), "{ nope");

    let err = find_licenses(&package_paths(temp.path())).unwrap_err();
    assert!(matches!(err, Error::LicenseMeta { .. }));
}

#[test]
fn test_license_missing_content_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("licenses/mit.json"),
        r#"{"name": "MIT", "content_file": "missing.txt"}"#,
    );

    let err = find_licenses(&package_paths(temp.path())).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_version_loads_from_package_root() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("version.txt"), "3.10.4\n");

    let version = AppVersion::load(&package_paths(temp.path())).unwrap();
    assert_eq!(version.parts(), &[3, 10, 4]);
    assert_eq!(version.as_str(), "3.10.4");
}

#[test]
fn test_version_missing_file_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let err = AppVersion::load(&package_paths(temp.path())).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}
