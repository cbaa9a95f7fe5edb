//! End-to-end completion tests against the standard catalog.

use robotfw::ide::{CompletionKind, Completions, completions};
use robotfw::parser::{Document, ParseOptions, SourceSet};
use robotfw::{AnalysisHost, Catalog, LineCol};
use rstest::rstest;
use std::sync::Arc;

const SUITE: &str = "\
| *** Settings *** |
| Library | Selenium2Library | WITH NAME | S2L |
| Library | Collections |

| *** Variables *** |
| ${GREETING} | hello |

| *** Test Cases *** |
| My Test | Log | ${GREETING} |
|         | Open Login |

| *** Keywords *** |
| Open Login | S2L.Open Browser | http://localhost |
";

fn suite() -> Document {
    Document::parse_with(
        "/suite/login.robot",
        SUITE,
        &SourceSet::new(),
        Catalog::standard(),
        ParseOptions::default(),
    )
}

fn names(result: &Completions) -> Vec<&str> {
    result.names().collect()
}

#[test]
fn test_suite_symbols() {
    let doc = suite();
    let symbols = doc.symbols();

    for var in ["${GREETING}", "${EMPTY}", "${True}", "${False}"] {
        assert!(symbols.variables().contains(var), "missing {var}");
    }
    assert!(symbols.test_cases().contains("My Test"));
    assert_eq!(symbols.test_cases().len(), 1);
    assert!(symbols.keywords().contains("Open Login"));
    assert_eq!(
        symbols.resolve_alias("S2L").map(|s| s.as_str()),
        Some("Selenium2Library")
    );
}

#[test]
fn test_alias_dot_yields_exactly_library_keywords() {
    let doc = suite();
    let line = "| Open Login | S2L.";
    let result = completions(&doc, line, 11, line.len());

    let catalog = Catalog::standard();
    let expected: Vec<&str> = catalog
        .keywords("Selenium2Library")
        .iter()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(names(&result), expected);
    assert!(
        result
            .iter()
            .all(|i| i.kind == CompletionKind::Keyword && i.class == "Selenium2Library")
    );
}

#[test]
fn test_library_cell_suggests_unimported_libraries() {
    let doc = suite();
    let line = "  | Library | Collections |";
    // after `Library | `
    let result = completions(&doc, line, 2, 14);

    let offered = names(&result);
    assert!(offered.contains(&"String"));
    assert!(offered.contains(&"XML"));
    assert!(!offered.contains(&"Collections"));
    assert!(!offered.contains(&"Selenium2Library"));
    assert!(!offered.contains(&"BuiltIn"));
    assert!(result.iter().all(|i| i.kind == CompletionKind::Library));
}

#[test]
fn test_keyword_cell_mixes_sources() {
    let doc = suite();
    let result = completions(&doc, "|         | Op", 9, 14);

    let has = |name: &str, kind: CompletionKind, class: &str| {
        result
            .iter()
            .any(|i| i.name == name && i.kind == kind && i.class == class)
    };
    assert!(has("S2L", CompletionKind::Library, "Library"));
    assert!(has("Should Be Equal", CompletionKind::Keyword, "BuiltIn"));
    assert!(has("Append To List", CompletionKind::Keyword, "Collections"));
    assert!(has("Open Browser", CompletionKind::Keyword, "Selenium2Library"));
    assert!(has("Open Login", CompletionKind::UserKeyword, "user defined"));
    // String was never imported
    assert!(!result.iter().any(|i| i.class == "String"));
}

#[rstest]
#[case("| Su", 4, CompletionKind::Setting)]
#[case("| Library | Col", 15, CompletionKind::Library)]
#[case("| My Test | Lo", 14, CompletionKind::Keyword)]
#[case("| My Test | Log | ${GR", 22, CompletionKind::Variable)]
#[case("| My Test | Log | a | ${", 23, CompletionKind::Variable)]
fn test_column_categories(#[case] line: &str, #[case] col: usize, #[case] kind: CompletionKind) {
    let doc = suite();
    let result = completions(&doc, line, 0, col);

    assert!(!result.is_empty());
    assert!(result.iter().any(|i| i.kind == kind));
}

#[rstest]
#[case("| Library | String |", 0)]
#[case("| Library | String |", 1)]
#[case("| Library | String |", 11)]
#[case("| Library | String |", 20)]
#[case("Library    String", 8)]
#[case("", 3)]
fn test_no_candidates(#[case] line: &str, #[case] col: usize) {
    let doc = suite();
    assert!(completions(&doc, line, 0, col).is_empty());
}

#[test]
fn test_settings_offered_in_any_table() {
    let doc = suite();
    // first column of a test case row still gets settings names
    let result = completions(&doc, "| My", 8, 4);

    assert_eq!(result.len(), 8);
    assert!(names(&result).contains(&"Suite Setup"));
}

#[test]
fn test_host_reparse_picks_up_new_lines() {
    let sources = Arc::new(SourceSet::new());
    let mut host = AnalysisHost::new().with_loader(sources.clone());
    host.set_file_content("/suite/login.robot", SUITE);

    // queried line was added after the parse; the old symbols still apply
    let result = host.completions("| New Test | Log | ${", 20, 21);
    assert!(result.names().any(|n| n == "${GREETING}"));

    let edited = format!("{SUITE}| *** Variables *** |\n| ${{LATER}} | x |\n");
    host.set_file_content("/suite/login.robot", edited);
    let result = host.completions("| New Test | Log | ${", 20, 21);
    assert!(result.names().any(|n| n == "${LATER}"));
    assert!(host.should_complete(LineCol::new(1, 4)));
}
