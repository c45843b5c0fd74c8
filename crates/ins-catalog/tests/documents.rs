//! Member and table documents of the embedded catalog.

use ins_catalog::kinds::{CartoonCharacter, MilitaryService, UsState};
use ins_model::{Enumeration, Id};

#[test]
fn state_member_document() {
    let virginia = Id::<UsState>::new("va").member().expect("Virginia");
    insta::assert_snapshot!(
        serde_json::to_string_pretty(virginia).expect("serialize member"),
        @r#"
    {
      "Value": "VA",
      "Description": "Virginia",
      "Meta": {
        "DisplayName": "Virginia"
      },
      "Name": "Virginia"
    }
    "#
    );
}

#[test]
fn service_document_uses_canonical_references() {
    let service = Id::<MilitaryService>::new("1").member().expect("service");
    insta::assert_snapshot!(
        serde_json::to_string(service).expect("serialize member"),
        @r#"{"Value":"1","Description":"AirForce E1","Meta":{"Branch":"AirForce","Rank":"E1"},"Name":"AirForceE1"}"#
    );
}

#[test]
fn hierarchical_table_document_omits_parents() {
    let table = CartoonCharacter::table().expect("table");
    let document = serde_json::to_value(table).expect("serialize table");
    assert_eq!(document["Name"], "CartoonCharacter");
    assert_eq!(document["Items"].as_array().map(Vec::len), Some(table.len()));
    insta::assert_snapshot!(
        serde_json::to_string(&document["Items"][1]).expect("serialize member"),
        @r#"{"Description":"Bart Simpson","Name":"BartSimpson","Value":"bart"}"#
    );
}
