//! End-to-end: catalog file on disk → shadow forest → path queries

mod common;

use common::{catalog_fixture, write_json, write_text};
use serde_json::json;
use shadowtree::{
    build_shadow_forest, build_shadow_forest_from_value, category_path, find_by_path, load_toc,
    parse_toc, Classifier, ClassifierConfig, MatchRecord, PathQuery, TitleIndex, TocError,
    WorkKind,
};

#[test]
fn forest_from_catalog_file() {
    let file = write_json(&catalog_fixture());
    let toc = load_toc(file.path()).unwrap();

    let forest = build_shadow_forest(&toc, "Genesis");

    assert_eq!(
        forest.authors().collect::<Vec<_>>(),
        vec!["רש\"י", "אבן עזרא", "אור החיים", "אונקלוס"]
    );
    assert_eq!(forest.terminal_count(), 4);
}

#[test]
fn category_association_admits_multi_target_work() {
    let forest = build_shadow_forest_from_value(&catalog_fixture(), "Genesis").unwrap();

    // Ibn Ezra names two base texts but sits in a "Rishonim on Genesis" category
    assert!(forest.get("אבן עזרא").is_some());
    // Sforno names the same two base texts without such a category
    assert!(forest.get("ספורנו").is_none());
}

#[test]
fn modern_work_is_excluded_but_siblings_survive() {
    let forest = build_shadow_forest_from_value(&catalog_fixture(), "Genesis").unwrap();

    assert!(forest.get("העמק דבר").is_none());
    let or_hachaim = forest.get("אור החיים").unwrap().terminals()[0];
    assert_eq!(or_hachaim.path, vec!["Tanakh", "Acharonim", "אור החיים"]);
}

#[test]
fn configured_rules_change_classification() {
    let config_file = write_text("exclusion_keywords: [contemporary]\n");
    let config = ClassifierConfig::load(config_file.path()).unwrap();
    let toc = parse_toc(&catalog_fixture()).unwrap();

    let forest = Classifier::new(config).build(&toc, "Genesis");

    assert_eq!(forest.len(), 5);
    assert_eq!(
        forest.get("העמק דבר").unwrap().terminals()[0].title,
        "Haamek Davar on Genesis"
    );
}

#[test]
fn path_query_over_catalog() {
    let forest = build_shadow_forest_from_value(&catalog_fixture(), "Genesis").unwrap();

    let results = find_by_path(&forest, &["Tanakh", "Targum", "אונקלוס"]);
    assert_eq!(
        results,
        vec![MatchRecord {
            author: "אונקלוס".to_string(),
            title: "Onkelos Genesis".to_string(),
            kind: WorkKind::Translation,
            path: vec!["Tanakh".to_string(), "Targum".to_string(), "אונקלוס".to_string()],
        }]
    );

    // Grouping level shared by several authors
    assert!(find_by_path(&forest, &["Tanakh", "Rishonim on Genesis"]).is_empty());
    // Hebrew category labels are not ancestor segments
    assert!(find_by_path(&forest, &["תנ\"ך", "תרגומים", "אונקלוס"]).is_empty());
}

#[test]
fn torah_book_path_resolves_under_labelled_categories() {
    let toc = json!([{
        "category": "Tanakh",
        "heCategory": "תנ\"ך",
        "contents": [{
            "category": "Torah",
            "heCategory": "תורה",
            "contents": [
                {
                    "title": "Genesis",
                    "categories": ["Tanakh", "Torah", "Commentary", "Genesis"],
                    "dependence": "Commentary"
                },
                {
                    "title": "Exodus",
                    "heTitle": "שמות",
                    "categories": ["Tanakh", "Torah"],
                    "contents": [{
                        "title": "Rashi on Exodus",
                        "heTitle": "רש\"י",
                        "categories": ["Tanakh", "Commentary"],
                        "base_text_titles": ["Exodus"]
                    }]
                }
            ]
        }]
    }]);

    let forest = build_shadow_forest_from_value(&toc, "Genesis").unwrap();
    let results = PathQuery::torah_book("Genesis").execute(&forest);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].author, "Genesis");
    assert_eq!(results[0].path, vec!["Tanakh", "Torah", "Genesis"]);

    // Works nested under a Torah book sit below the same English prefix
    let forest = build_shadow_forest_from_value(&toc, "Exodus").unwrap();
    let rashi = find_by_path(&forest, &["Tanakh", "Torah", "Exodus", "רש\"י"]);
    assert_eq!(rashi.len(), 1);
    assert_eq!(rashi[0].title, "Rashi on Exodus");
    assert!(PathQuery::torah_book("Exodus").execute(&forest).is_empty());
}

#[test]
fn scenario_rashi_lookup() {
    let toc = json!([
        { "title": "Genesis", "categories": ["Tanakh"], "contents": [] },
        {
            "title": "Rashi on Genesis",
            "heTitle": "רש\"י",
            "categories": ["Commentary"],
            "baseTextTitles": ["Genesis"],
            "contents": []
        }
    ]);
    let forest = build_shadow_forest_from_value(&toc, "Genesis").unwrap();

    let results = find_by_path(&forest, &["רש\"י"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].author, "רש\"י");
    assert_eq!(results[0].title, "Rashi on Genesis");
    assert_eq!(results[0].kind, WorkKind::Commentary);
    assert_eq!(results[0].path, vec!["רש\"י"]);

    assert!(find_by_path(&forest, &["רש\"י", "Nonexistent"]).is_empty());
}

#[test]
fn match_record_serializes_for_callers() {
    let forest = build_shadow_forest_from_value(&catalog_fixture(), "Genesis").unwrap();
    let results = find_by_path(&forest, &["Tanakh", "Rishonim on Genesis", "רש\"י"]);

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["author"], "רש\"י");
    assert_eq!(json[0]["kind"], "Commentary");
    assert_eq!(json[0]["path"][1], "Rishonim on Genesis");
}

#[test]
fn unrelated_root_text_yields_empty_forest() {
    let forest = build_shadow_forest_from_value(&catalog_fixture(), "Exodus").unwrap();
    assert!(forest.is_empty());
    assert!(find_by_path(&forest, &["Tanakh"]).is_empty());
}

#[test]
fn corrupt_catalog_file_is_rejected() {
    let file = write_text(r#"[{"title": "Genesis", "contents": [1, 2]}]"#);
    let err = load_toc(file.path()).unwrap_err();
    assert!(matches!(err, TocError::Shape { .. }));
    assert!(err.to_string().contains("/0/contents/0"));
}

#[test]
fn missing_catalog_file_is_io_error() {
    let err = load_toc("/nonexistent/catalog.json").unwrap_err();
    assert!(matches!(err, TocError::Io(_)));
}

#[test]
fn title_lookups_over_catalog() {
    let toc = parse_toc(&catalog_fixture()).unwrap();

    let index = TitleIndex::build(&toc);
    assert_eq!(index.len(), 13);
    assert_eq!(index.english("ראשונים על בראשית"), Some("Rishonim on Genesis"));

    assert_eq!(
        category_path(&toc, "אונקלוס").unwrap(),
        vec!["תנ\"ך", "תרגומים", "אונקלוס"]
    );
}
