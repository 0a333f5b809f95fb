// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text report: per-round tables, the final matrix, then every path.

use std::io::{self, Write};

use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, Table};
use warshall_core::{DistanceMatrix, Solution};

/// Render `matrix` with row and column headers offset by `base`.
pub(crate) fn distance_table(matrix: &DistanceMatrix, base: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("")];
    header.extend((0..matrix.order()).map(|col| Cell::new(col + base)));
    table.set_header(header);

    for (row, values) in matrix.rows().enumerate() {
        let mut cells = vec![Cell::new(row + base)];
        cells.extend(
            values
                .iter()
                .map(|d| Cell::new(d).set_alignment(CellAlignment::Center)),
        );
        table.add_row(cells);
    }
    table
}

/// Write the full report.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    solution: &Solution,
    base: usize,
    show_iterations: bool,
) -> io::Result<()> {
    if solution.distances.is_empty() {
        writeln!(out, "Empty graph: nothing to solve.")?;
        return Ok(());
    }

    if show_iterations {
        writeln!(out, "Distance Matrix Iterations:")?;
        for snapshot in &solution.snapshots {
            writeln!(out)?;
            writeln!(
                out,
                "Iteration {} (via vertex {}, {} improved):",
                snapshot.round + 1,
                snapshot.round + base,
                snapshot.improvements
            )?;
            writeln!(out, "{}", distance_table(&snapshot.distances, base))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Final Shortest Path Matrix:")?;
    writeln!(out, "{}", distance_table(&solution.distances, base))?;
    writeln!(out)?;

    writeln!(out, "Paths:")?;
    if solution.paths.is_empty() {
        writeln!(out, "(no reachable pairs)")?;
    }
    for record in &solution.paths {
        writeln!(
            out,
            "Shortest path from {} to {}: {}, Distance: {}",
            record.source + base,
            record.target + base,
            record.describe(base),
            record.distance
        )?;
    }
    Ok(())
}
