use serde_json::json;

use gpcase_core::multivalue::MultiValue;

#[test]
fn round_trips_through_wire_form() {
    let original = MultiValue::new(["Firearm", "Medication stockpile", "Sharp objects"]);
    let wire = original.to_wire();
    assert_eq!(wire, "Firearm;Medication stockpile;Sharp objects");

    let back = MultiValue::from_wire(&json!(wire));
    assert_eq!(back, original);
}

#[test]
fn semicolon_string_drops_empty_segments() {
    let value = MultiValue::from_wire(&json!("a;;b; ;c;"));
    assert_eq!(value.as_slice(), ["a", "b", "c"]);
}

#[test]
fn json_array_reads_equivalently_to_string() {
    let from_array = MultiValue::from_wire(&json!(["PHQ-9", "GAD-7"]));
    let from_string = MultiValue::from_wire(&json!("PHQ-9;GAD-7"));
    assert_eq!(from_array, from_string);
}

#[test]
fn array_skips_non_string_items() {
    let value = MultiValue::from_wire(&json!(["a", 1, null, "b"]));
    assert_eq!(value.as_slice(), ["a", "b"]);
}

#[test]
fn null_and_numbers_read_as_empty() {
    assert!(MultiValue::from_wire(&json!(null)).is_empty());
    assert!(MultiValue::from_wire(&json!(42)).is_empty());
    assert!(MultiValue::from_wire(&json!({})).is_empty());
}

#[test]
fn order_is_preserved() {
    let value = MultiValue::from_wire(&json!("z;a;m"));
    assert_eq!(value.as_slice(), ["z", "a", "m"]);
}

#[test]
fn contains_matches_whole_values() {
    let value = MultiValue::new(["Firearm", "Rope"]);
    assert!(value.contains("Firearm"));
    assert!(!value.contains("Fire"));
}
