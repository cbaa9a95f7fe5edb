//! Resource imports resolved against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use robotfw::parser::{Document, ImportOutcome};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn parse_file(path: &Path) -> Document {
    let contents = fs::read_to_string(path).unwrap();
    Document::parse(path, &contents)
}

#[test]
fn test_import_from_ancestor_directory() {
    let dir = TempDir::new().unwrap();
    let main = write(
        dir.path(),
        "suites/login/main.robot",
        "| *** Settings *** |\n| Resource | ../../resources/common.robot |\n",
    );
    let common = write(
        dir.path(),
        "resources/common.robot",
        "| *** Settings *** |\n\
         | Library | String |\n\
         | Library | Collections | WITH NAME | C |\n\
         | *** Variables *** |\n\
         | ${BASE URL} | http://localhost |\n\
         | *** Keywords *** |\n\
         | Login As | [Arguments] | ${user} |\n",
    );

    let doc = parse_file(&main);
    let symbols = doc.symbols();

    assert!(symbols.keywords().contains("Login As"));
    assert!(symbols.variables().contains("${BASE URL}"));
    assert!(symbols.libraries().contains("String"));
    assert_eq!(symbols.resolve_alias("C").map(|s| s.as_str()), Some("Collections"));
    assert!(symbols.has_resource(&fs::canonicalize(&common).unwrap()));
}

#[test]
fn test_transitive_imports_and_cycle() {
    let dir = TempDir::new().unwrap();
    let a = write(
        dir.path(),
        "a.robot",
        "| *** Settings *** |\n| Resource | b.robot |\n| *** Keywords *** |\n| Step A |\n",
    );
    write(
        dir.path(),
        "b.robot",
        "| *** Settings *** |\n| Resource | c.robot |\n| *** Keywords *** |\n| Step B |\n",
    );
    write(
        dir.path(),
        "c.robot",
        "| *** Settings *** |\n| Resource | b.robot |\n| *** Test Cases *** |\n| Case C |\n",
    );

    let doc = parse_file(&a);
    let symbols = doc.symbols();

    assert!(symbols.keywords().contains("Step A"));
    assert!(symbols.keywords().contains("Step B"));
    assert!(symbols.test_cases().contains("Case C"));
    assert_eq!(symbols.resources().len(), 2);
    assert!(
        doc.imports()
            .iter()
            .any(|o| matches!(o, ImportOutcome::AlreadyImported { .. }))
    );
}

#[test]
fn test_same_file_via_two_spellings_imported_once() {
    let dir = TempDir::new().unwrap();
    let main = write(
        dir.path(),
        "main.robot",
        "| *** Settings *** |\n\
         | Resource | common.robot |\n\
         | Resource | res/../common.robot |\n",
    );
    write(dir.path(), "res/other.robot", "");
    let common = write(dir.path(), "common.robot", "| *** Keywords *** |\n| Shared |\n");

    let doc = parse_file(&main);
    let symbols = doc.symbols();

    assert!(symbols.keywords().contains("Shared"));
    assert_eq!(symbols.resources().len(), 1);
    assert!(symbols.has_resource(&fs::canonicalize(&common).unwrap()));
    assert!(matches!(
        doc.imports(),
        [ImportOutcome::Imported { .. }, ImportOutcome::AlreadyImported { .. }]
    ));
}

#[test]
fn test_self_import_through_dotdot_terminates() {
    let dir = TempDir::new().unwrap();
    let a = write(
        dir.path(),
        "a.robot",
        "| *** Settings *** |\n| Resource | x/../a.robot |\n| *** Keywords *** |\n| Loop |\n",
    );
    write(dir.path(), "x/placeholder.robot", "");

    let doc = parse_file(&a);
    let symbols = doc.symbols();

    assert!(symbols.keywords().contains("Loop"));
    assert_eq!(symbols.resources().len(), 1);
    assert!(symbols.has_resource(&fs::canonicalize(&a).unwrap()));
    assert!(
        doc.imports()
            .iter()
            .any(|o| matches!(o, ImportOutcome::AlreadyImported { .. }))
    );
}

#[test]
fn test_unknown_resource_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let main = write(
        dir.path(),
        "main.robot",
        "| *** Settings *** |\n| Resource | nope.robot |\n| *** Keywords *** |\n| Local |\n",
    );

    let doc = parse_file(&main);

    assert!(doc.symbols().resources().is_empty());
    assert!(doc.symbols().keywords().contains("Local"));
    assert!(matches!(doc.imports(), [ImportOutcome::NotFound { .. }]));
}

#[test]
fn test_unreadable_resource_is_isolated() {
    let dir = TempDir::new().unwrap();
    let main = write(
        dir.path(),
        "main.robot",
        "| *** Settings *** |\n| Resource | broken.robot |\n| *** Keywords *** |\n| Local |\n",
    );
    // not valid UTF-8, so reading it as text fails
    fs::write(dir.path().join("broken.robot"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let doc = parse_file(&main);

    assert!(doc.symbols().keywords().contains("Local"));
    assert!(doc.symbols().resources().is_empty());
    assert!(doc.imports()[0].is_failed());
}

#[test]
fn test_parse_twice_is_identical() {
    let dir = TempDir::new().unwrap();
    let main = write(
        dir.path(),
        "main.robot",
        "| *** Settings *** |\n| Resource | lib.robot |\n| *** Variables *** |\n| ${X} | 1 |\n",
    );
    write(dir.path(), "lib.robot", "| *** Keywords *** |\n| Helper |\n");

    assert_eq!(parse_file(&main).symbols(), parse_file(&main).symbols());
}
