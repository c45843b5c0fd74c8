//! Marker types for every enumeration in the catalog.
//!
//! Each marker is uninhabited and exists only to parameterize
//! [`Id`] and [`ValidatedId`](ins_model::ValidatedId):
//!
//! ```
//! use ins_catalog::kinds::MilitaryService;
//! use ins_model::Id;
//!
//! let service = Id::<MilitaryService>::new("1");
//! assert_eq!(MilitaryService::branch(&service).to_id_string(), "AirForce");
//! assert_eq!(MilitaryService::rank(&service).to_id_string(), "E1");
//! ```

use std::sync::OnceLock;

use ins_model::{
    ALTERNATIVE_KEYS, AlternativeKeyed, Catalog, Enumeration, Field, Flag, Hierarchical, Id,
    Integer, List, Table, Text,
};

use crate::registry;

/// Generic code run against a kind chosen at runtime.
pub trait KindVisitor {
    type Output;

    fn visit<E: Enumeration>(self) -> Self::Output;
}

macro_rules! enumerations {
    ($( $(#[$meta:meta])* $kind:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $kind {}

            impl Enumeration for $kind {
                const NAME: &'static str = stringify!($kind);

                fn catalog() -> Option<&'static Catalog> {
                    registry::catalog()
                }

                fn table() -> Option<&'static Table> {
                    static TABLE: OnceLock<Option<&'static Table>> = OnceLock::new();
                    *TABLE.get_or_init(|| Self::catalog()?.table(Self::NAME))
                }
            }
        )*

        /// Names of every enumeration kind, in declaration order.
        pub const KIND_NAMES: &[&str] = &[$(stringify!($kind)),*];

        /// Run `visitor` with the marker type whose name matches `name`
        /// (ignoring ASCII case). `None` for unknown names.
        pub fn visit_kind<V: KindVisitor>(name: &str, visitor: V) -> Option<V::Output> {
            $(
                if name.eq_ignore_ascii_case(stringify!($kind)) {
                    return Some(visitor.visit::<$kind>());
                }
            )*
            None
        }
    };
}

enumerations! {
    /// Credit card brands.
    CreditCard,
    /// Insurance carriers with the states they write policies in.
    InsuranceCarrier,
    /// U.S. states and the District of Columbia.
    UsState,
    /// Military service records joining a branch and a rank.
    MilitaryService,
    MilitaryBranch,
    MilitaryRank,
    PaymentPlan,
    CoverageTerm,
    VehicleUsage,
    /// Years with the current carrier, addressable by alternative keys.
    YearsWithCurrentCarrier,
    ResidenceType,
    MaritalStatus,
    /// Fathers and sons.
    CartoonCharacter,
}

impl Hierarchical for CartoonCharacter {}

impl AlternativeKeyed for YearsWithCurrentCarrier {}

impl InsuranceCarrier {
    /// Postal codes of the states the carrier writes policies in.
    pub const VALID_STATES: Field<List> = Field::new("ValidStates");

    /// Whether `carrier` writes policies in `state`.
    pub fn writes_in(carrier: &Id<Self>, state: &Id<UsState>) -> bool {
        let (Some(carrier), Some(state)) = (carrier.member(), state.member()) else {
            return false;
        };
        Self::VALID_STATES
            .get(carrier)
            .is_some_and(|states| states.iter().any(|s| s.eq_ignore_ascii_case(state.id())))
    }
}

impl UsState {
    pub const DISPLAY_NAME: Field<Text> = Field::new("DisplayName");
}

impl MilitaryService {
    pub const BRANCH: &'static str = "Branch";
    pub const RANK: &'static str = "Rank";

    pub fn branch(service: &Id<Self>) -> Id<MilitaryBranch> {
        service.join_id(Self::BRANCH)
    }

    pub fn rank(service: &Id<Self>) -> Id<MilitaryRank> {
        service.join_id(Self::RANK)
    }
}

impl MilitaryRank {
    pub const GRADE: Field<Integer> = Field::new("Grade");
    pub const OFFICER: Field<Flag> = Field::new("Officer");
}

impl PaymentPlan {
    pub const INSTALLMENTS: Field<Integer> = Field::new("Installments");
    pub const REQUIRES_DOWN_PAYMENT: Field<Flag> = Field::new("RequiresDownPayment");
}

impl CoverageTerm {
    pub const MONTHS: Field<Integer> = Field::new("Months");
}

impl VehicleUsage {
    pub const COMMERCIAL: Field<Flag> = Field::new("Commercial");
}

impl YearsWithCurrentCarrier {
    pub const ALTERNATIVE_KEYS: Field<List> = Field::new(ALTERNATIVE_KEYS);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TableName;

    impl KindVisitor for TableName {
        type Output = Option<&'static str>;

        fn visit<E: Enumeration>(self) -> Self::Output {
            E::table().map(Table::name)
        }
    }

    #[test]
    fn every_kind_has_a_table() {
        for name in KIND_NAMES {
            assert_eq!(
                visit_kind(name, TableName),
                Some(Some(*name)),
                "kind {name} has no table"
            );
        }
    }

    #[test]
    fn every_table_has_a_kind() {
        let catalog = registry::catalog().expect("catalog");
        for table in catalog.tables() {
            assert!(
                KIND_NAMES.contains(&table.name()),
                "table {} has no marker type",
                table.name()
            );
        }
    }

    #[test]
    fn visit_kind_ignores_case_and_rejects_unknown_names() {
        assert_eq!(visit_kind("usstate", TableName), Some(Some("UsState")));
        assert_eq!(visit_kind("NoSuchKind", TableName), None);
    }

    #[test]
    fn carriers_write_in_listed_states() {
        let geico = Id::<InsuranceCarrier>::new("geico");
        assert!(InsuranceCarrier::writes_in(&geico, &Id::new("DC")));
        assert!(InsuranceCarrier::writes_in(&geico, &Id::new("va")));
        assert!(!InsuranceCarrier::writes_in(&geico, &Id::new("AK")));
        assert!(!InsuranceCarrier::writes_in(&Id::new("nope"), &Id::new("VA")));
    }

    #[test]
    fn table_is_cached_per_kind() {
        let first = UsState::table().expect("table");
        let second = UsState::table().expect("table");
        assert!(std::ptr::eq(first, second));
    }
}
