use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use listings_clean::CleanSummary;
use listings_cli::pipeline::ValidationRun;
use listings_validate::{CheckKind, CheckStatus, Issue};

pub fn print_clean_summary(summary: &CleanSummary) {
    println!("Input: {}", summary.input.reference());
    println!(
        "Output: {} ({})",
        summary.output.reference(),
        summary.output_path.display()
    );
    let stats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Raw"), Cell::new(stats.input_rows)]);
    table.add_row(vec![
        Cell::new("After price filter"),
        Cell::new(stats.after_price_filter),
    ]);
    table.add_row(vec![
        Cell::new("After location filter"),
        Cell::new(stats.after_location_filter).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        dim_cell("Dropped"),
        count_cell(stats.dropped_rows(), Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("Unparsed review dates"),
        count_cell(stats.unparsed_review_dates, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_validation_summary(run: &ValidationRun) {
    println!("Dataset: {}", run.candidate.reference());
    match &run.reference {
        Some(reference) => println!("Reference: {}", reference.reference()),
        None => println!("Reference: none (distribution check skipped)"),
    }
    if let Some(path) = &run.report_json {
        println!("Report: {}", path.display());
    }
    let report = &run.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Check"),
        header_cell("Status"),
        header_cell("Count"),
        header_cell("Details"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &report.outcomes {
        let count = outcome.issue.as_ref().and_then(Issue::count);
        let details = match (outcome.status, report.divergence) {
            (CheckStatus::Passed, Some(divergence))
                if outcome.check == CheckKind::Distribution =>
            {
                dim_cell(format!("divergence {divergence:.4} bits"))
            }
            _ => Cell::new(outcome.message()),
        };
        table.add_row(vec![
            dim_cell(outcome.check.rule_id()),
            Cell::new(outcome.check.label()),
            status_cell(outcome.status),
            count.map_or_else(|| dim_cell("-"), Cell::new),
            details,
        ]);
    }
    println!("{table}");
    println!(
        "{} rows: {} passed, {} failed, {} skipped",
        report.rows,
        report.count(CheckStatus::Passed),
        report.count(CheckStatus::Failed),
        report.count(CheckStatus::Skipped)
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(18)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: CheckStatus) -> Cell {
    let color = match status {
        CheckStatus::Passed => Color::Green,
        CheckStatus::Failed => Color::Red,
        CheckStatus::Skipped => Color::DarkGrey,
    };
    Cell::new(status.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
