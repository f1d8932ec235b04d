use keyweight::config::ScoringConfig;
use keyweight::geometry::KeyMap;
use keyweight::layouts::{KnownLayout, LayoutDefinition, LayoutTables};
use keyweight::scorer::{BigramKind, Scorer};
use keyweight::BigramRegistry;
use rstest::rstest;

fn registry(apply_row_distance: bool) -> BigramRegistry {
    BigramRegistry::with_config(ScoringConfig { apply_row_distance }).unwrap()
}

#[rstest]
#[case('a', 's', BigramKind::OutRoll, 336_000)] // 60 * 70 * 80
#[case('s', 'a', BigramKind::InRoll, 560_000)] // 100 * 80 * 70
#[case('f', 'j', BigramKind::Alternate, 722_000)] // 80 * 95 * 95
#[case('d', 'k', BigramKind::Alternate, 800_000)]
#[case('f', 'g', BigramKind::SameFinger, 38_000)] // 10 * 95 * 40
#[case('a', 'a', BigramKind::SameFinger, 49_000)]
fn test_qwerty_weights(
    #[case] c1: char,
    #[case] c2: char,
    #[case] kind: BigramKind,
    #[case] weight: u32,
) {
    let reg = registry(false);
    let b = reg.bigram(KnownLayout::Qwerty, c1, c2).unwrap();
    assert_eq!(b.kind, kind);
    assert_eq!(b.weight, weight);
    assert_eq!(reg.bigram_weight(KnownLayout::Qwerty, c1, c2).unwrap(), weight);
}

#[rstest]
#[case('a', 's', 336_000 * 100)] // Home row: index 0
#[case('q', 'z', 49_000 * 10)] // Index 3
#[case('e', 'd', 10 * 100 * 100 * 60)] // Index 2
#[case('q', 'p', 80 * 70 * 70 * 80)] // Cross hand, index 1
fn test_row_distance_term_when_enabled(#[case] c1: char, #[case] c2: char, #[case] weight: u32) {
    let reg = registry(true);
    assert_eq!(reg.bigram_weight(KnownLayout::Qwerty, c1, c2).unwrap(), weight);
}

#[test]
fn test_row_distance_term_ignored_by_default() {
    let reg = registry(false);
    let b = reg.bigram(KnownLayout::Qwerty, 'q', 'z').unwrap();
    assert_eq!(b.row_distance_index, 3);
    assert_eq!(b.weight, 49_000);
}

#[test]
fn test_full_table_size() {
    let reg = registry(false);
    for layout in reg.list_layouts() {
        let table = reg.table(layout);
        assert_eq!(table.alphabet().len(), 30);
        assert_eq!(table.len(), 900);
        assert_eq!(table.layout(), layout.to_string());
    }
}

#[test]
fn test_table_is_row_major_by_alphabet() {
    let reg = registry(false);
    let table = reg.table(KnownLayout::Qwerty);
    let alphabet = table.alphabet();
    for (idx, b) in table.iter().enumerate() {
        assert_eq!(b.first, alphabet[idx / alphabet.len()]);
        assert_eq!(b.second, alphabet[idx % alphabet.len()]);
    }
}

#[test]
fn test_asymmetric_pairs_exist() {
    let reg = registry(false);
    let table = reg.table(KnownLayout::Qwerty);
    let asymmetric = table
        .iter()
        .filter(|b| table.weight(b.second, b.first).unwrap() != b.weight)
        .count();
    assert!(asymmetric > 0);
    assert_ne!(
        reg.bigram_weight(KnownLayout::Qwerty, 'a', 's').unwrap(),
        reg.bigram_weight(KnownLayout::Qwerty, 's', 'a').unwrap()
    );
}

#[test]
fn test_ranked_is_descending() {
    let reg = registry(false);
    let ranked = reg.table(KnownLayout::Qwerty).ranked();
    assert_eq!(ranked.len(), 900);
    assert!(ranked.windows(2).all(|w| w[0].weight >= w[1].weight));

    // Index -> middle on the same hand: 100 * 95 * 100
    assert_eq!(ranked[0].weight, 950_000);
    assert_eq!(ranked[0].kind, BigramKind::InRoll);
}

#[test]
fn test_scorer_on_custom_block() {
    let rows = ["abcdefghij", "klmnopqrst", "uvwxyz0123"];
    let def = LayoutDefinition::new("custom", &rows, LayoutTables::STANDARD).unwrap();
    let keys = KeyMap::build(&def).unwrap();
    let table = Scorer::new(ScoringConfig::default()).build_table(&def, &keys);

    assert_eq!(table.len(), 900);
    // 'a' pinky, 'b' ring, both left hand
    let ab = table.get('a', 'b').unwrap();
    assert_eq!(ab.kind, BigramKind::OutRoll);
    assert_eq!(ab.weight, 60 * 70 * 80);
    assert!(table.get('a', '9').is_err());
}

#[test]
fn test_csv_export_has_every_pair() {
    let reg = registry(false);
    let table = reg.table(KnownLayout::Hyroll);

    let mut buf = Vec::new();
    table.write_csv(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("first,second,kind,row_distance_index,weight")
    );
    assert_eq!(lines.count(), 900);
}
