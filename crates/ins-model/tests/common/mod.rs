#![allow(dead_code)]

use std::sync::OnceLock;

use ins_model::{
    ALTERNATIVE_KEYS, AlternativeKeyed, Catalog, Enumeration, FieldKind, Hierarchical,
    MemberRecord, TableDefinition, TableSchema,
};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

pub fn fixture() -> &'static Catalog {
    CATALOG.get_or_init(|| Catalog::build(definitions()).expect("build fixture catalog"))
}

fn definitions() -> Vec<TableDefinition> {
    vec![
        TableDefinition::new(
            TableSchema::new("State", "U.S. state").with_field("DisplayName", FieldKind::Text),
            vec![
                MemberRecord::new("VA", "Virginia").with_meta("DisplayName", "Virginia"),
                MemberRecord::new("MD", "Maryland").with_meta("DisplayName", "Maryland"),
                MemberRecord::new("DC", "DistrictOfColumbia")
                    .with_meta("DisplayName", "District of Columbia"),
            ],
        ),
        TableDefinition::new(
            TableSchema::new("Card", "Credit card brand"),
            vec![
                MemberRecord::new("visa", "Visa").with_description("Visa"),
                MemberRecord::new("amex", "AmericanExpress"),
            ],
        ),
        TableDefinition::new(
            TableSchema::new("Cartoon", "Cartoon character").with_parents(),
            vec![
                MemberRecord::new("homer", "Homer"),
                MemberRecord::new("bart", "Bart").with_parent("homer"),
            ],
        ),
        TableDefinition::new(
            TableSchema::new("Years", "Years with current carrier")
                .with_field(ALTERNATIVE_KEYS, FieldKind::List),
            vec![
                MemberRecord::new("1year", "OneYear").with_meta(ALTERNATIVE_KEYS, "1"),
                MemberRecord::new("3years", "ThreeYears").with_meta(ALTERNATIVE_KEYS, "3,three"),
            ],
        ),
        TableDefinition::new(
            TableSchema::new("Service", "Military service")
                .with_field("Branch", FieldKind::Reference("Branch".to_string()))
                .with_field("Rank", FieldKind::Reference("Rank".to_string())),
            vec![
                MemberRecord::new("1", "AirForceE1")
                    .with_meta("Branch", "airforce")
                    .with_meta("Rank", "e1"),
            ],
        ),
        TableDefinition::new(
            TableSchema::new("Branch", "Military branch"),
            vec![MemberRecord::new("AirForce", "AirForce")],
        ),
        TableDefinition::new(
            TableSchema::new("Rank", "Military rank"),
            vec![MemberRecord::new("E1", "EnlistedE1")],
        ),
    ]
}

macro_rules! fixture_kind {
    ($kind:ident => $name:literal) => {
        #[derive(Debug)]
        pub enum $kind {}

        impl Enumeration for $kind {
            const NAME: &'static str = $name;

            fn catalog() -> Option<&'static Catalog> {
                Some(fixture())
            }
        }
    };
}

fixture_kind!(State => "State");
fixture_kind!(Card => "Card");
fixture_kind!(Cartoon => "Cartoon");
fixture_kind!(Years => "Years");
fixture_kind!(Service => "Service");
fixture_kind!(Branch => "Branch");
fixture_kind!(Rank => "Rank");

impl Hierarchical for Cartoon {}
impl AlternativeKeyed for Years {}

/// A kind whose catalog is unavailable.
#[derive(Debug)]
pub enum Orphan {}

impl Enumeration for Orphan {
    const NAME: &'static str = "Orphan";

    fn catalog() -> Option<&'static Catalog> {
        None
    }
}
