//! Tests for the block and property scanners

use super::*;
use crate::error::Ts2PsqlError;
use indoc::indoc;
use pretty_assertions::assert_eq;

const TWO_BLOCKS: &str = indoc! {r#"
    /**
     * A user that can have some orders
     */
    /* ts2psql { "tableName": "users" } */
    export type User = {
      /* ts2psql { "primaryKey": true, "serial": true } */
      id: number
      /* ts2psql { "columnName": "username", "maxLength": 50 } */
      name: string
      /* ts2psql */
      timeLastLogin?: Date
    }
    /* ts2psql end */

    export type NotAnnotated = {
      id: number
    }

    /* ts2psql */
    export type Order = {
      /* ts2psql { "fk": { "type": "User", "property": "id" } } */
      userId: number
    }
    /* ts2psql end */
"#};

fn scan_blocks<'t>(matchers: &AnnotationMatchers, text: &'t str) -> Vec<RawBlock<'t>> {
    BlockScanner::new(matchers, text)
        .collect::<Result<Vec<_>, _>>()
        .expect("blocks should scan")
}

#[test]
fn test_block_scanner_finds_blocks_in_order() {
    let matchers = AnnotationMatchers::new().unwrap();
    let blocks = scan_blocks(&matchers, TWO_BLOCKS);

    let names: Vec<&str> = blocks.iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["User", "Order"]);

    assert_eq!(blocks[0].metadata.trim(), r#"{ "tableName": "users" }"#);
    assert_eq!(blocks[1].metadata.trim(), "");
}

#[test]
fn test_block_body_stops_at_end_marker() {
    let matchers = AnnotationMatchers::new().unwrap();
    let blocks = scan_blocks(&matchers, TWO_BLOCKS);

    let body = blocks[0].body;
    assert!(body.contains("timeLastLogin?: Date"));
    assert!(body.trim_end().ends_with('}'));
    assert!(!body.contains("end */"));
    assert!(!body.contains("NotAnnotated"));
}

#[test]
fn test_block_offsets_point_at_start_marker() {
    let matchers = AnnotationMatchers::new().unwrap();
    let blocks = scan_blocks(&matchers, TWO_BLOCKS);

    for block in &blocks {
        assert!(TWO_BLOCKS[block.offset..].starts_with("/* ts2psql"));
    }
    assert!(blocks[0].offset < blocks[1].offset);
}

#[test]
fn test_block_scanner_is_restartable() {
    let matchers = AnnotationMatchers::new().unwrap();

    let first = scan_blocks(&matchers, TWO_BLOCKS);
    let second = scan_blocks(&matchers, TWO_BLOCKS);

    assert_eq!(first, second);
}

#[test]
fn test_block_scanner_cursor_moves_past_end_markers() {
    let matchers = AnnotationMatchers::new().unwrap();
    let mut scanner = BlockScanner::new(&matchers, TWO_BLOCKS);
    assert_eq!(scanner.cursor(), 0);

    scanner.next().unwrap().unwrap();
    let after_user = scanner.cursor();
    assert!(TWO_BLOCKS[..after_user].ends_with("/* ts2psql end */"));
    assert!(TWO_BLOCKS[after_user..].contains("NotAnnotated"));

    scanner.next().unwrap().unwrap();
    assert_eq!(TWO_BLOCKS[scanner.cursor()..].trim(), "");

    assert!(scanner.next().is_none());
}

#[test]
fn test_block_scanner_without_annotations() {
    let matchers = AnnotationMatchers::new().unwrap();
    let text = "export type Plain = {\n  id: number\n}\n";

    let mut scanner = BlockScanner::new(&matchers, text);
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn test_block_scanner_reports_missing_end_marker() {
    let matchers = AnnotationMatchers::new().unwrap();
    let text = indoc! {"
        /* ts2psql */
        export type Good = {
          /* ts2psql */
          id: number
        }
        /* ts2psql end */

        /* ts2psql */
        export type Broken = {
          /* ts2psql */
          id: number
        }
    "};

    let mut scanner = BlockScanner::new(&matchers, text);

    let good = scanner.next().unwrap().unwrap();
    assert_eq!(good.name, "Good");

    match scanner.next() {
        Some(Err(Ts2PsqlError::UnterminatedBlock {
            name, line, offset, ..
        })) => {
            assert_eq!(name, "Broken");
            assert_eq!(line, 8);
            assert!(text[offset..].starts_with("/* ts2psql */\nexport type Broken"));
        }
        other => panic!("expected UnterminatedBlock, got {other:?}"),
    }

    assert!(scanner.next().is_none());
}

#[test]
fn test_block_scanner_ignores_end_marker_before_start() {
    let matchers = AnnotationMatchers::new().unwrap();
    let text = "/* ts2psql end */\n/* ts2psql */\nexport type A = {\n}\n/* ts2psql end */";

    let blocks = scan_blocks(&matchers, text);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "A");
    assert_eq!(blocks[0].body, "\n}\n");
}

#[test]
fn test_custom_tag_is_matched_literally() {
    let matchers = AnnotationMatchers::with_tag("sql.table").unwrap();
    assert_eq!(matchers.tag(), "sql.table");

    let text = indoc! {"
        /* sqlXtable */
        export type Skipped = {
        }
        /* sqlXtable end */

        /* sql.table */
        export type Kept = {
          /* sql.table */
          id: number
        }
        /* sql.table end */
    "};

    let blocks = scan_blocks(&matchers, text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "Kept");

    let properties: Vec<_> = PropertyScanner::new(&matchers, blocks[0].body).collect();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "id");
}

#[test]
fn test_property_scanner_preserves_source_order() {
    let matchers = AnnotationMatchers::new().unwrap();
    let blocks = scan_blocks(&matchers, TWO_BLOCKS);

    let properties: Vec<_> = PropertyScanner::new(&matchers, blocks[0].body).collect();
    let names: Vec<&str> = properties.iter().map(|p| p.name).collect();
    let types: Vec<&str> = properties.iter().map(|p| p.type_token).collect();

    assert_eq!(names, vec!["id", "name", "timeLastLogin"]);
    assert_eq!(types, vec!["number", "string", "Date"]);
    assert_eq!(
        properties[0].metadata.trim(),
        r#"{ "primaryKey": true, "serial": true }"#
    );
}

#[test]
fn test_property_scanner_optional_marker() {
    let matchers = AnnotationMatchers::new().unwrap();
    let body = indoc! {"
          /* ts2psql */
          createdAt: Date
          /* ts2psql */
          deletedAt?: Date
        }
    "};

    let properties: Vec<_> = PropertyScanner::new(&matchers, body).collect();

    assert_eq!(properties.len(), 2);
    assert!(!properties[0].optional);
    assert!(properties[1].optional);
    assert_eq!(properties[1].name, "deletedAt");
}

#[test]
fn test_property_scanner_skips_unannotated_lines() {
    let matchers = AnnotationMatchers::new().unwrap();
    let body = indoc! {r#"
          /* ts2psql { "unique": true } */
          uuid: string
          // plain comment
          ignored: number
          /* ts2psql */
          tags: foo
        }
    "#};

    let properties: Vec<_> = PropertyScanner::new(&matchers, body).collect();

    assert_eq!(
        properties,
        vec![
            RawProperty {
                metadata: r#"{ "unique": true } "#,
                name: "uuid",
                optional: false,
                type_token: "string",
            },
            RawProperty {
                metadata: "",
                name: "tags",
                optional: false,
                type_token: "foo",
            },
        ]
    );
}

#[test]
fn test_property_scanner_empty_body() {
    let matchers = AnnotationMatchers::new().unwrap();
    assert_eq!(PropertyScanner::new(&matchers, "").count(), 0);
    assert_eq!(PropertyScanner::new(&matchers, "\n}\n").count(), 0);
}
