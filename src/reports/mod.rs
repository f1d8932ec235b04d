use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyweight::geometry::KeyPosition;
use keyweight::layouts::LayoutDefinition;
use keyweight::scorer::{Bigram, BigramKind};

fn kind_color(kind: BigramKind) -> Color {
    match kind {
        BigramKind::InRoll => Color::Green,
        BigramKind::Alternate => Color::Cyan,
        BigramKind::OutRoll => Color::Yellow,
        BigramKind::SameFinger => Color::Red,
    }
}

pub fn print_layout_grid(def: &LayoutDefinition) {
    println!("\nLayout: {}", def.name());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in def.rows() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&ch| Cell::new(ch).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_layout_list(defs: &[&LayoutDefinition]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Keys"),
        Cell::new("Bigrams"),
        Cell::new("Alphabet"),
    ]);

    for def in defs {
        let n = def.alphabet().len();
        table.add_row(vec![
            Cell::new(def.name()).add_attribute(Attribute::Bold),
            Cell::new(n).set_alignment(CellAlignment::Right),
            Cell::new(n * n).set_alignment(CellAlignment::Right),
            Cell::new(def.alphabet_string()),
        ]);
    }
    println!("{}", table);
}

pub fn print_bigram_detail(bigram: &Bigram, k1: &KeyPosition, k2: &KeyPosition) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Row"),
        Cell::new("Col"),
        Cell::new("Home Dist"),
        Cell::new("Home Row"),
        Cell::new("Hand"),
        Cell::new("Finger"),
        Cell::new("Col Weight"),
    ]);

    for k in [k1, k2] {
        table.add_row(vec![
            Cell::new(k.ch).add_attribute(Attribute::Bold),
            Cell::new(k.row),
            Cell::new(k.col),
            Cell::new(k.row_distance_to_home),
            Cell::new(if k.is_home_row() { "yes" } else { "no" }),
            Cell::new(k.hand),
            Cell::new(k.finger),
            Cell::new(k.column_weight),
        ]);
    }
    println!("{}", table);

    println!(
        "{}{} -> {} (x{}), row distance index {}, weight {}",
        bigram.first,
        bigram.second,
        bigram.kind,
        bigram.kind.weight(),
        bigram.row_distance_index,
        bigram.weight
    );
}

pub fn print_ranked_table(bigrams: &[&Bigram]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Bigram").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Row Idx"),
        Cell::new("Weight").fg(Color::Cyan),
    ]);

    for i in [0, 3, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, b) in bigrams.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("{}{}", b.first, b.second)).add_attribute(Attribute::Bold),
            Cell::new(b.kind).fg(kind_color(b.kind)),
            Cell::new(b.row_distance_index),
            Cell::new(b.weight).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}
