use keyweight::error::KeyWeightError;
use keyweight::geometry::KeyMap;
use keyweight::layouts::{all_layouts, KnownLayout, LayoutDefinition, LayoutTables};
use rstest::rstest;
use std::str::FromStr;

#[rstest]
#[case("qwerty", KnownLayout::Qwerty)]
#[case("hyroll", KnownLayout::Hyroll)]
fn test_preset_names_round_trip(#[case] name: &str, #[case] expected: KnownLayout) {
    let parsed = KnownLayout::from_str(name).expect("known preset");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), name);
}

#[test]
fn test_unknown_preset_name_is_rejected() {
    assert!(KnownLayout::from_str("dvorak").is_err());
}

#[rstest]
#[case(KnownLayout::Qwerty, ",./;abcdefghijklmnopqrstuvwxyz")]
#[case(KnownLayout::Hyroll, "',.`abcdefghijklmnopqrstuvwxyz")]
fn test_alphabet_is_sorted_and_complete(#[case] layout: KnownLayout, #[case] expected: &str) {
    let def = layout.definition().unwrap();
    assert_eq!(def.alphabet_string(), expected);
    assert_eq!(def.alphabet().len(), 30);
    assert!(def.alphabet().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_every_preset_builds_a_full_key_map() {
    for layout in all_layouts() {
        let def = layout.definition().unwrap();
        let keys = KeyMap::build(&def).unwrap();
        assert_eq!(keys.len(), def.alphabet().len(), "{}", layout);

        // Stored in alphabet order
        for (idx, key) in keys.keys().iter().enumerate() {
            assert_eq!(key.ch, def.alphabet()[idx]);
        }
    }
}

#[test]
fn test_duplicate_character_is_a_config_defect() {
    let result = LayoutDefinition::new(
        "dup",
        &["qwertyuiop", "asdfghjkl;", "zxcvbnm,.q"],
        LayoutTables::STANDARD,
    );
    match result {
        Err(KeyWeightError::Config(msg)) => assert!(msg.contains("'q'"), "{}", msg),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[rstest]
#[case(&["qwertyuiop[", "asdfghjkl;", "zxcvbnm,./"])] // Row too wide
#[case(&["qwertyuiop", "as", "zxcvbnm,./"])] // Ragged middle row
#[case(&["ab", "cd", "ef"])] // Partial block
#[case(&["qwertyuiop", "asdfghjkl;"])] // Missing row
#[case(&["qwertyuiop", "asdfghjkl;", "zxcvbnm,./", "1234567890"])] // Extra row
fn test_non_rectangular_block_is_rejected(#[case] rows: &[&str]) {
    let result = LayoutDefinition::new("bad", rows, LayoutTables::STANDARD);
    assert!(
        matches!(result, Err(KeyWeightError::Config(_))),
        "{:?} should be rejected",
        rows
    );
}

#[test]
fn test_standard_row_distances_fit_weight_table() {
    assert_eq!(LayoutTables::STANDARD.max_row_distance_index(), 3);
}

#[test]
fn test_row_distances_overrunning_weights_are_rejected() {
    let tables = LayoutTables {
        row_distances_to_home: [5, 0, -5],
        ..LayoutTables::STANDARD
    };
    // Top -> bottom on one hand: 5 + 10
    assert_eq!(tables.max_row_distance_index(), 15);

    let result = LayoutDefinition::new("far", &KnownLayout::Qwerty.rows(), tables);
    match result {
        Err(KeyWeightError::Config(msg)) => assert!(msg.contains("index 15"), "{}", msg),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_custom_full_block() {
    let rows = ["abcdefghij", "klmnopqrst", "uvwxyz0123"];
    let def = LayoutDefinition::new("custom", &rows, LayoutTables::STANDARD).unwrap();
    assert_eq!(def.alphabet().len(), 30);
    assert_eq!(def.index_of('0'), Some(0));
    assert_eq!(def.index_of('a'), Some(4));
    assert_eq!(def.index_of('A'), None);

    let coords: Vec<_> = def.coordinates().take(2).collect();
    assert_eq!(coords, vec![('a', 0, 0), ('b', 0, 1)]);
    assert_eq!(def.coordinates().last(), Some(('3', 2, 9)));
}
