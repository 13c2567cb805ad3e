use agegrid::category::{CategoryDescriptor, CategoryTable, Party, FALLBACK_COLOR};
use agegrid::error::GridError;
use rstest::rstest;
use std::io::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;

#[rstest]
#[case("Con", "Conservative", "#0a559d")]
#[case("Lab", "Labour", "#d20915")]
#[case("SNP", "Scottish National Party", "#fff58c")]
#[case("LD", "Liberal Democrat", "#f89f31")]
#[case("DUP", "DUP", "#ca3415")]
#[case("SF", "Sinn Fein", "#0d665f")]
#[case("PC", "Plaid Cymru", "#68b76b")]
#[case("Green", "Green", "#008000")]
#[case("Ind", "Independent", "#c0c0c0")]
#[case("Spk", "Speaker", "#909090")]
#[case("UKIP", "Unknown", "#c0c0c0")]
#[case("", "Unknown", "#c0c0c0")]
fn test_builtin_lookup(#[case] code: &str, #[case] label: &str, #[case] fill: &str) {
    let table = CategoryTable::uk_parties();
    let d = table.lookup(code);
    assert_eq!(d.label, label);
    assert_eq!(d.fill, fill);
}

#[test]
fn test_party_codes_parse_from_table_spelling() {
    assert_eq!(Party::from_str("SNP").unwrap(), Party::Snp);
    assert_eq!(Party::from_str("Con").unwrap(), Party::Con);
    assert!(Party::from_str("snp").is_err());
    assert_eq!(Party::iter().count(), 10);
}

#[test]
fn test_table_is_known() {
    let table = CategoryTable::uk_parties();
    assert!(table.is_known("Green"));
    assert!(!table.is_known("Whig"));
}

#[test]
fn test_table_loads_from_json_and_extends_codes() {
    let mut table = CategoryTable::uk_parties();
    table.entries.insert(
        "UKIP".to_string(),
        CategoryDescriptor::new("UK Independence Party", "#70147a", "#70147a"),
    );
    let json = serde_json::to_string(&table).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();

    let loaded = CategoryTable::load_from_file(file.path()).unwrap();
    assert_eq!(loaded.lookup("UKIP").label, "UK Independence Party");
    assert_eq!(loaded.lookup("Nope").fill, FALLBACK_COLOR);
}

#[test]
fn test_table_missing_file_is_io_error() {
    let result = CategoryTable::load_from_file("no/such/table.json");
    assert!(matches!(result, Err(GridError::Io(_))));
}
