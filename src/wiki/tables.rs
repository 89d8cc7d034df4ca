// src/wiki/tables.rs
// =============================================================================
// This module reads the two "wikitable" tables on a creature page.
//
// Table 1 holds the basic facts. Its cells are read in document order with
// row boundaries ignored, and picked by position:
//
//   | No. | Name  | (image) | Personality |
//   | 7   | Glorp | ...     | Friendly    |
//
// Table 2 holds compatibility info. Its 6th cell lists who the creature
// likes and dislikes, one declaration per line:
//
//   Likes: Moon Bunny, Space Sheep
//   Dislikes: Aerial Whale
//
// Wiki editors write "TBA" wherever a value is not known yet. Those cells
// are left out of the record instead of being copied in.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use crate::config::KeyMatching;
use crate::wiki::record::{CreatureNumber, CreatureRecord};

const TBA: &str = "TBA";

// Position of the compatibility cell in table 2.
const COMPATIBILITY_CELL: usize = 5;

// Below this many cells table 2 is not worth looking at.
const MIN_COMPATIBILITY_CELLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasicField {
    Number,
    Name,
    Personality,
}

// Which table-1 cell feeds which field. Cells not listed are ignored.
const TABLE1_FIELDS: &[(usize, BasicField)] = &[
    (0, BasicField::Number),
    (1, BasicField::Name),
    (3, BasicField::Personality),
];

// Likes and dislikes parsed from one compatibility cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compatibility {
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
}

// Fills every table-backed field of `record` from a parsed detail page.
//
// Missing tables or cells are not errors: whatever can be read is read,
// the rest stays None. Returns true only if both tables were complete
// enough to reach the compatibility cell.
pub fn fill_from_tables(
    document: &Html,
    record: &mut CreatureRecord,
    matching: KeyMatching,
) -> bool {
    let table_selector = Selector::parse("table.wikitable").expect("valid selector");
    let tables: Vec<ElementRef> = document.select(&table_selector).collect();

    let Some(basic_table) = tables.first() else {
        return false;
    };
    apply_basic_info(record, &cell_texts(*basic_table));

    let Some(compat_table) = tables.get(1) else {
        return false;
    };
    let cells = cell_texts(*compat_table);
    if cells.len() < MIN_COMPATIBILITY_CELLS {
        return false;
    }
    // Tables with 4 or 5 cells have no compatibility cell either.
    let Some(compat_cell) = cells.get(COMPATIBILITY_CELL) else {
        return false;
    };

    let compatibility = parse_compatibility(compat_cell, matching);
    record.likes = Some(compatibility.likes);
    record.dislikes = Some(compatibility.dislikes);
    true
}

// Text of every <td> below `table`, in document order.
pub fn cell_texts(table: ElementRef) -> Vec<String> {
    let cell_selector = Selector::parse("td").expect("valid selector");

    table
        .select(&cell_selector)
        .map(|cell| cell.text().collect::<String>())
        .collect()
}

// Maps table-1 cells onto number/name/personality.
pub fn apply_basic_info(record: &mut CreatureRecord, cells: &[String]) {
    for (index, field) in TABLE1_FIELDS {
        let Some(text) = cells.get(*index) else {
            continue;
        };
        if text.contains(TBA) {
            continue;
        }

        match field {
            BasicField::Number => record.number = Some(CreatureNumber::parse(text)),
            BasicField::Name => record.name = Some(text.clone()),
            BasicField::Personality => record.personality = Some(text.clone()),
        }
    }
}

// Parses the text of a compatibility cell.
//
// Each line looks like "<key>: <name>, <name>, ...". Only the text between
// the first and second colon is used as the value list. Lines mentioning
// TBA, and lines without any colon, contribute nothing.
pub fn parse_compatibility(text: &str, matching: KeyMatching) -> Compatibility {
    let mut compatibility = Compatibility::default();

    if text.trim() == TBA {
        return compatibility;
    }

    for line in text.split('\n') {
        if line.is_empty() || line.contains(TBA) {
            continue;
        }

        let mut parts = line.split(':');
        let key = parts.next().unwrap_or_default().to_lowercase();
        let Some(values) = parts.next() else {
            continue;
        };

        let names: Vec<String> = values.split(',').map(|name| name.trim().to_string()).collect();

        match matching {
            KeyMatching::Substring => {
                // "dislikes" contains "likes", so a dislikes line hits both.
                if key.contains("likes") {
                    compatibility.likes.extend(names.iter().cloned());
                }
                if key.contains("dislikes") {
                    compatibility.dislikes.extend(names);
                }
            }
            KeyMatching::DislikesFirst => {
                if key.contains("dislikes") {
                    compatibility.dislikes.extend(names);
                } else if key.contains("likes") {
                    compatibility.likes.extend(names);
                }
            }
        }
    }

    compatibility
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is let-else?
//    - let Some(x) = value else { return; };
//    - Binds x when the pattern matches, otherwise runs the else block,
//      which must leave the function (return, continue, break...)
//    - Keeps the "happy path" unindented
//
// 2. Why cells.get(5) instead of cells[5]?
//    - Indexing a Vec out of range panics
//    - .get() returns Option, so a short table simply yields None
//
// 3. Why is TABLE1_FIELDS a const slice of tuples?
//    - The cell positions are the fragile part of this scraper
//    - Having them in one place means a layout change on the wiki is a
//      one-line fix
// -----------------------------------------------------------------------------
