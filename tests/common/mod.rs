//! Common test utilities: catalog fixtures written to disk

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// A small catalog in the upstream index shape
pub fn catalog_fixture() -> Value {
    json!([
        {
            "category": "Tanakh",
            "heCategory": "תנ\"ך",
            "contents": [
                {
                    "category": "Torah",
                    "heCategory": "תורה",
                    "contents": [
                        {
                            "title": "Genesis",
                            "heTitle": "בראשית",
                            "categories": ["Tanakh", "Torah"]
                        },
                        {
                            "title": "Exodus",
                            "heTitle": "שמות",
                            "categories": ["Tanakh", "Torah"]
                        }
                    ]
                },
                {
                    "category": "Rishonim on Genesis",
                    "heCategory": "ראשונים על בראשית",
                    "contents": [
                        {
                            "title": "Rashi on Genesis",
                            "heTitle": "רש\"י",
                            "categories": ["Tanakh", "Rishonim on Tanakh", "Rashi"],
                            "dependence": "Commentary",
                            "base_text_titles": ["Genesis"]
                        },
                        {
                            "title": "Ibn Ezra on Torah",
                            "heTitle": "אבן עזרא",
                            "categories": ["Tanakh", "Commentary", "Rishonim on Genesis"],
                            "base_text_titles": ["Genesis", "Exodus"]
                        },
                        {
                            "title": "Sforno on Torah",
                            "heTitle": "ספורנו",
                            "categories": ["Tanakh", "Commentary"],
                            "base_text_titles": ["Genesis", "Exodus"]
                        }
                    ]
                },
                {
                    "category": "Acharonim",
                    "heCategory": "אחרונים",
                    "enShortDesc": "Later commentators",
                    "contents": [
                        {
                            "title": "Haamek Davar on Genesis",
                            "heTitle": "העמק דבר",
                            "categories": ["Tanakh", "Commentary"],
                            "base_text_titles": ["Genesis"],
                            "enShortDesc": "A MODERN reading by the Netziv"
                        },
                        {
                            "title": "Or HaChaim on Genesis",
                            "heTitle": "אור החיים",
                            "categories": ["Tanakh", "Commentary"],
                            "base_text_titles": ["Genesis"],
                            "enShortDesc": "Eighteenth-century commentary"
                        }
                    ]
                },
                {
                    "category": "Targum",
                    "heCategory": "תרגומים",
                    "contents": [
                        {
                            "title": "Onkelos Genesis",
                            "heTitle": "אונקלוס",
                            "categories": ["Tanakh", "Targum", "Onkelos"],
                            "base_text_titles": ["Genesis"]
                        }
                    ]
                }
            ]
        }
    ])
}

/// Write JSON to a temporary file that lives as long as the handle
pub fn write_json(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", value).expect("write temp file");
    file
}

/// Write raw text to a temporary file
pub fn write_text(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file
}
