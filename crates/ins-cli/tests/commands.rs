//! Integration tests for the subcommands against the embedded catalog.

use ins_cli::commands::{
    DecodeReport, run_decode, run_encode, run_lookup, run_members, run_tables,
};
use ins_cli::summary::tables_table;
use ins_model::WireFormat;

#[test]
fn tables_lists_every_enumeration() {
    assert!(!run_tables().expect("tables").is_empty());

    let catalog = ins_catalog::catalog().expect("catalog");
    let table = tables_table(catalog);
    let rows: Vec<Vec<String>> = table
        .row_iter()
        .map(|row| row.cell_iter().map(|cell| cell.content()).collect())
        .collect();
    let names: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, ins_catalog::KIND_NAMES);

    let service = rows
        .iter()
        .find(|row| row[0] == "MilitaryService")
        .expect("service row");
    assert_eq!(service[5], "Branch -> MilitaryBranch, Rank -> MilitaryRank");
    let cartoon = rows
        .iter()
        .find(|row| row[0] == "CartoonCharacter")
        .expect("cartoon row");
    assert_eq!(cartoon[3], "yes");
}

#[test]
fn members_json_uses_sort_order_when_asked() {
    let positional: serde_json::Value =
        serde_json::from_str(&run_members("CreditCard", false, true).expect("members"))
            .expect("json");
    let sorted: serde_json::Value =
        serde_json::from_str(&run_members("creditcard", true, true).expect("members"))
            .expect("json");
    assert_eq!(positional[0]["Value"], "visa");
    assert_eq!(sorted[0]["Value"], "mastercard");
}

#[test]
fn members_table_shows_parents() {
    let output = run_members("CartoonCharacter", false, false).expect("members");
    assert!(output.contains("bart"));
    assert!(output.contains("homer"));
}

#[test]
fn unknown_enumeration_is_an_error() {
    let error = run_members("NoSuchThing", false, false).expect_err("unknown");
    assert_eq!(error.to_string(), "unknown enumeration 'NoSuchThing'");
    assert!(run_encode("NoSuchThing", "x", WireFormat::Json, None).is_err());
}

#[test]
fn lookup_reports_links() {
    let output = run_lookup("MilitaryService", "1", false).expect("lookup");
    insta::assert_snapshot!(output, @r#"
    {
      "Value": "1",
      "Description": "AirForce E1",
      "Meta": {
        "Branch": "AirForce",
        "Rank": "E1"
      },
      "Name": "AirForceE1",
      "Links": {
        "Branch": "AirForce",
        "Rank": "E1"
      }
    }
    "#);
}

#[test]
fn lookup_reports_parent_or_self() {
    let bart: serde_json::Value =
        serde_json::from_str(&run_lookup("CartoonCharacter", "BART", false).expect("lookup"))
            .expect("json");
    assert_eq!(bart["Parent"], "homer");

    let homer: serde_json::Value =
        serde_json::from_str(&run_lookup("CartoonCharacter", "homer", false).expect("lookup"))
            .expect("json");
    assert_eq!(homer["Parent"], "homer");
}

#[test]
fn lookup_by_alternative_key() {
    let output = run_lookup("YearsWithCurrentCarrier", "3", true).expect("lookup");
    assert!(output.contains("\"Value\": \"3years\""));
    assert!(run_lookup("UsState", "VA", true).is_err());
    assert!(run_lookup("UsState", "ZZ", false).is_err());
}

#[test]
fn encode_emits_canonical_spelling() {
    assert_eq!(
        run_encode("CreditCard", "VISA", WireFormat::Json, None).expect("encode"),
        "\"visa\""
    );
    assert_eq!(
        run_encode("UsState", "va", WireFormat::Xml, Some("State")).expect("encode"),
        "<State>VA</State>"
    );
    let error = run_encode("UsState", "xyz", WireFormat::Json, None).expect_err("invalid");
    assert_eq!(error.to_string(), "cannot encode 'xyz': not a member of UsState");
}

#[test]
fn strict_decode() {
    assert_eq!(
        run_decode("UsState", "\"va\"", WireFormat::Json, false).expect("decode"),
        "VA"
    );
    assert_eq!(
        run_decode("UsState", "null", WireFormat::Json, false).expect("decode"),
        ""
    );
    assert!(run_decode("UsState", "\"no_such_state\"", WireFormat::Json, false).is_err());
}

#[test]
fn validated_decode_reports_capture() {
    let output =
        run_decode("UsState", "\"no_such_state\"", WireFormat::Json, true).expect("decode");
    let report: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(report["valid"], false);
    assert_eq!(report["value"], serde_json::Value::Null);
    assert_eq!(report["captured"], "no_such_state");
    assert_eq!(
        report["errors"][0],
        "cannot decode 'no_such_state': not a member of UsState"
    );

    let output = run_decode("UsState", "<UsState>md</UsState>", WireFormat::Xml, true)
        .expect("decode");
    let report: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(report["value"], "MD");
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn decode_report_is_plain_data() {
    let report = DecodeReport {
        valid: true,
        value: Some("VA".to_string()),
        captured: Some("va".to_string()),
        errors: Vec::new(),
    };
    assert_eq!(
        serde_json::to_string(&report).expect("serialize"),
        r#"{"valid":true,"value":"VA","captured":"va","errors":[]}"#
    );
}
