//! Tests for the schema builder

use super::*;
use crate::error::Ts2PsqlError;
use crate::models::ForeignKey;
use crate::naming::normalize;
use crate::scanner::AnnotationMatchers;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::Path;

const ACCOUNTS: &str = indoc! {r#"
    /* ts2psql */
    export type UserAccount = {
      /* ts2psql { "primaryKey": true, "serial": true } */
      id: number
      /* ts2psql { "ColumnName": "login", "Unique": true, "MaxLength": 30 } */
      userName: string
      /* ts2psql { "numberType": "NUMERIC(10, 2)" } */
      balance: number
      /* ts2psql */
      lastSeenAt?: Date
    }
    /* ts2psql end */
"#};

const ORDERS: &str = indoc! {r#"
    /* ts2psql { "tableName": "orders" } */
    export type Order = {
      /* ts2psql { "primaryKey": true } */
      id: number
      /* ts2psql { "fk": { "type": "UserAccount", "property": "id" } } */
      accountId: number
      /* ts2psql { "fk": { "type": UserAccount, "property": "id" } } */
      brokenRef: number
    }
    /* ts2psql end */
"#};

fn parse(text: &str) -> Vec<crate::models::Declaration> {
    let matchers = AnnotationMatchers::new().unwrap();
    SchemaBuilder::new(&matchers)
        .parse_text(text, None)
        .expect("text should parse")
}

#[test]
fn test_default_names_are_normalized() {
    let declarations = parse(ACCOUNTS);
    assert_eq!(declarations.len(), 1);

    let account = &declarations[0];
    assert_eq!(account.name, "UserAccount");
    assert_eq!(account.table_name, normalize("UserAccount"));
    assert_eq!(account.table_name, "user_account");

    let last_seen = account.property("lastSeenAt").unwrap();
    assert_eq!(last_seen.column_name, "last_seen_at");
    assert_eq!(last_seen.column_name, normalize(&last_seen.name));
}

#[test]
fn test_metadata_overrides_names_and_constraints() {
    let declarations = parse(ACCOUNTS);
    let account = &declarations[0];

    let id = account.property("id").unwrap();
    assert!(id.primary_key);
    assert!(id.serial);
    assert!(!id.optional);

    let user_name = account.property("userName").unwrap();
    assert_eq!(user_name.column_name, "login");
    assert!(user_name.unique);
    assert_eq!(user_name.max_length, 30);
    assert_eq!(user_name.source_type_token, "string");

    let balance = account.property("balance").unwrap();
    assert_eq!(balance.number_type, "NUMERIC(10, 2)");

    assert!(account.property("lastSeenAt").unwrap().optional);
}

#[test]
fn test_properties_keep_source_order() {
    let declarations = parse(ACCOUNTS);
    let names: Vec<&str> = declarations[0]
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["id", "userName", "balance", "lastSeenAt"]);
}

#[test]
fn test_table_name_metadata_and_foreign_keys() {
    let declarations = parse(ORDERS);
    let order = &declarations[0];

    assert_eq!(order.table_name, "orders");
    assert_eq!(
        order.property("accountId").unwrap().foreign_key,
        Some(ForeignKey::new("UserAccount", "id"))
    );
    assert_eq!(order.property("accountId").unwrap().column_name, "account_id");
}

#[test]
fn test_malformed_metadata_falls_back_to_defaults() {
    let declarations = parse(ORDERS);
    let broken = declarations[0].property("brokenRef").unwrap();

    assert_eq!(broken.foreign_key, None);
    assert_eq!(broken.column_name, "broken_ref");
    assert!(!broken.primary_key);
}

#[test]
fn test_null_metadata_field_keeps_constraints() {
    let declarations = parse(indoc! {r#"
        /* ts2psql */
        export type Counter = {
          /* ts2psql { "primaryKey": true, "serial": true, "numberType": null } */
          id: number
        }
        /* ts2psql end */
    "#});

    let id = declarations[0].property("id").unwrap();
    assert!(id.primary_key);
    assert!(id.serial);
    assert_eq!(id.number_type, "");
}

#[test]
fn test_sources_are_parsed_in_supplied_order() {
    let matchers = AnnotationMatchers::new().unwrap();
    let sources = vec![
        SourceFile::new("orders.ts", ORDERS),
        SourceFile::new("accounts.ts", ACCOUNTS),
    ];

    let schema = parse_sources(&matchers, &sources).unwrap();

    let names: Vec<&str> = schema.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Order", "UserAccount"]);
    assert_eq!(
        schema.declarations()[0].source_path.as_deref(),
        Some(Path::new("orders.ts"))
    );

    // Cross-file reference resolves within the run
    assert_eq!(schema.table_name_of("UserAccount"), Some("user_account"));
}

#[test]
fn test_add_source_counts_declarations() {
    let matchers = AnnotationMatchers::new().unwrap();
    let mut builder = SchemaBuilder::new(&matchers);

    assert_eq!(builder.add_source(&SourceFile::new("a.ts", ACCOUNTS)).unwrap(), 1);
    assert_eq!(builder.add_source(&SourceFile::new("empty.ts", "")).unwrap(), 0);
    assert_eq!(builder.add_source(&SourceFile::new("b.ts", ORDERS)).unwrap(), 1);

    assert_eq!(builder.declarations().len(), 2);
    assert_eq!(builder.build().len(), 2);
}

#[test]
fn test_unterminated_block_fails_with_path() {
    let matchers = AnnotationMatchers::new().unwrap();
    let broken = "/* ts2psql */\nexport type Dangling = {\n  /* ts2psql */\n  id: number\n}\n";
    let sources = vec![
        SourceFile::new("accounts.ts", ACCOUNTS),
        SourceFile::new("dangling.ts", broken),
    ];

    let err = parse_sources(&matchers, &sources).unwrap_err();

    match &err {
        Ts2PsqlError::InSource { path, error } => {
            assert_eq!(path, Path::new("dangling.ts"));
            assert!(matches!(
                error.as_ref(),
                Ts2PsqlError::UnterminatedBlock { name, line: 1, .. } if name == "Dangling"
            ));
        }
        other => panic!("expected InSource, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.starts_with("dangling.ts: "));
    assert!(message.contains("`Dangling`"));
    assert!(message.contains("/* ts2psql end */"));
}
