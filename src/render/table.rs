//! Per-table report blocks.

use crate::model::Table;

use super::ReportStats;

/// Render one table: dimensions, table regions, then every cell with its
/// regions. Cells keep the order the engine reported them in.
pub fn render_table(table_idx: usize, table: &Table) -> String {
    render_table_with_stats(table_idx, table, &mut ReportStats::new())
}

pub(crate) fn render_table_with_stats(
    table_idx: usize,
    table: &Table,
    stats: &mut ReportStats,
) -> String {
    stats.add_table();

    let mut output = vec![format!(
        "Table # {} has {} rows and {} columns",
        table_idx, table.row_count, table.column_count
    )];

    for region in &table.bounding_regions {
        output.push(format!(
            "Table # {} location on page: {} is {}",
            table_idx, region.page_number, region.polygon
        ));
    }

    for cell in &table.cells {
        stats.add_cell();
        output.push(format!(
            "...Cell[{}][{}] has text '{}'",
            cell.row_index, cell.column_index, cell.content
        ));
        for region in &cell.bounding_regions {
            output.push(format!(
                "...content on page {} is within bounding polygon '{}'",
                region.page_number, region.polygon
            ));
        }
    }

    log::debug!("rendered table {} ({} cells)", table_idx, table.cells.len());

    output.join("\n")
}
