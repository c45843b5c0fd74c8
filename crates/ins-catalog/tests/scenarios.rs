//! End-to-end scenarios against the embedded catalog.

use ins_catalog::kinds::{
    CartoonCharacter, CreditCard, MilitaryBranch, MilitaryRank, MilitaryService, UsState,
    YearsWithCurrentCarrier,
};
use ins_model::codec::{json, xml};
use ins_model::{CodecError, Enumeration, Id, ValidatedId};

#[test]
fn s1_state_round_trip() {
    let state = json::unmarshal::<UsState>(b"\"VA\"").expect("decode");
    assert_eq!(state, Id::new("VA"));
    assert_eq!(state.to_id_string(), "VA");

    let table = UsState::table().expect("UsState table");
    let virginia = table.by_id_string("va").expect("Virginia");
    assert_eq!(virginia.name(), "Virginia");
    assert_eq!(UsState::DISPLAY_NAME.get(virginia), Some("Virginia"));
    assert!(std::ptr::eq(virginia, state.member().expect("member")));
}

#[test]
fn s2_credit_card_case_fold() {
    let card = json::unmarshal::<CreditCard>(b"\"VISA\"").expect("decode");
    assert!(card.valid());
    assert_eq!(json::marshal(&card).expect("encode"), b"\"visa\"");
    assert_eq!(
        xml::to_element("CreditCard", &card).expect("encode"),
        "<CreditCard>visa</CreditCard>"
    );
}

#[test]
fn s3_validated_capture_on_bad_input() {
    let mut state = ValidatedId::<UsState>::none();
    json::unmarshal_validated(&mut state, b"\"no_such_state\"");
    assert!(!state.valid());
    assert_eq!(state.captured_value(), Some("no_such_state"));
    assert_eq!(state.errors().len(), 1);
}

#[test]
fn s4_validated_capture_on_empty() {
    let mut state = ValidatedId::<UsState>::none();
    json::unmarshal_validated(&mut state, b"\"\"");
    assert!(!state.valid());
    assert_eq!(state.captured_value(), Some(""));
    assert!(state.errors().is_empty());
}

#[test]
fn s5_strict_failure_on_bad_input() {
    assert_eq!(
        json::unmarshal::<UsState>(b"\"no_such_state\""),
        Err(CodecError::DecodeInvalid {
            enumeration: "UsState",
            value: "no_such_state".to_string(),
        })
    );
    assert!(matches!(
        xml::from_element::<UsState>("<UsState>no_such_state</UsState>"),
        Err(CodecError::DecodeInvalid { .. })
    ));
}

#[test]
fn s6_encode_invalid_strict() {
    let state = Id::<UsState>::new("xyz");
    assert_eq!(
        json::marshal(&state),
        Err(CodecError::EncodeInvalid {
            enumeration: "UsState",
            value: "xyz".to_string(),
        })
    );
    assert!(matches!(
        xml::to_element("UsState", &state),
        Err(CodecError::EncodeInvalid { .. })
    ));
}

#[test]
fn s7_alternative_key() {
    let table = YearsWithCurrentCarrier::table().expect("table");
    assert_eq!(table.by_alternative_key("3").map(|m| m.id()), Some("3years"));
    assert_eq!(
        Id::<YearsWithCurrentCarrier>::from_alternative_key(" THREE "),
        Id::new("3years")
    );
    assert_eq!(
        Id::<YearsWithCurrentCarrier>::from_alternative_key("5+"),
        Id::new("5plusyears")
    );
}

#[test]
fn s8_parent_via_convenience() {
    let homer = Id::<CartoonCharacter>::new("homer");
    assert_eq!(homer.parent(), homer);

    let bart = Id::<CartoonCharacter>::new("bart");
    assert_eq!(bart.parent(), Id::new("homer"));

    let stewie = ValidatedId::<CartoonCharacter>::decode("Stewie");
    assert_eq!(stewie.parent(), Id::new("peter"));
}

#[test]
fn s9_cross_enumeration_join() {
    let service = Id::<MilitaryService>::new("1");
    let branch = MilitaryService::branch(&service);
    let rank = MilitaryService::rank(&service);
    assert_eq!(branch, Id::<MilitaryBranch>::new("AirForce"));
    assert_eq!(rank, Id::<MilitaryRank>::named("EnlistedE1"));

    let record = service.member().expect("service record");
    assert_eq!(record.meta("Branch"), Some(branch.to_id_string().as_str()));
    assert!(std::ptr::eq(
        service.join(MilitaryService::BRANCH).expect("branch"),
        branch.member().expect("branch member")
    ));
}
