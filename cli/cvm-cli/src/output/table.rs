// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use comfy_table::{ContentArrangement, Table, presets::NOTHING};

/// Create a borderless table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers);
    table
}

/// Print rows under `headers`, or nothing at all when `rows` is empty
pub fn print_rows<I>(headers: &[&str], rows: I)
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut table = create_table(headers);
    let mut count = 0;
    for row in rows {
        table.add_row(row);
        count += 1;
    }
    if count > 0 {
        println!("{table}");
    }
}

/// Print `label: value` pairs with aligned values
pub fn print_fields(fields: &[(&str, String)]) {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in fields {
        println!("{:<width$}  {}", format!("{label}:"), value, width = width + 1);
    }
}
