//! Installing an on-disk catalog before first use.
//!
//! Runs as its own test binary so the process-wide catalog starts empty.

use std::fs;

use ins_catalog::embedded::{ENUMERATIONS_FILE, MEMBERS_FILE};
use ins_catalog::kinds::{CreditCard, UsState};
use ins_catalog::{CatalogConfig, LoadError};
use ins_model::{Enumeration, Id};

const ENUMERATIONS: &str = "\
Name,Description,Parents (Yes/No),Fields
CreditCard,Credit card brand,No,
";

const MEMBERS: &str = "\
Enumeration,Value,Name,Description,Sort Order,Parent,Metadata
CreditCard,visa,Visa,Visa,,,
CreditCard,diners,DinersClub,Diners Club,,,
";

#[test]
fn install_directory_catalog_once() {
    let dir = std::env::temp_dir().join(format!("ins-catalog-install-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create catalog dir");
    fs::write(dir.join(ENUMERATIONS_FILE), ENUMERATIONS).expect("write enumerations");
    fs::write(dir.join(MEMBERS_FILE), MEMBERS).expect("write members");

    assert!(!ins_catalog::is_initialized());
    let installed = ins_catalog::install(&CatalogConfig::directory(&dir)).expect("install");
    assert_eq!(installed.tables().len(), 1);
    assert!(std::ptr::eq(installed, ins_catalog::catalog().expect("catalog")));

    assert!(Id::<CreditCard>::new("DINERS").valid());
    assert!(!Id::<CreditCard>::new("amex").valid());

    // Kinds without a table in the installed catalog resolve nothing.
    assert!(UsState::table().is_none());
    assert!(!Id::<UsState>::new("VA").valid());
    assert!(Id::<UsState>::parse("VA").is_err());

    assert!(matches!(
        ins_catalog::install(&CatalogConfig::embedded()),
        Err(LoadError::AlreadyInitialized)
    ));

    fs::remove_dir_all(&dir).expect("remove catalog dir");
}
