//! Terminal rendering of the dashboard models with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cdash_core::project::{Alignment, TableProjection};
use cdash_core::{TABLE_HEADERS, human_format};
use cdash_model::{KpiSnapshot, Metric, Ranking};

/// Widest bar drawn in a ranking chart.
const BAR_WIDTH: usize = 30;

/// Accent palette for the rendered dashboard.
///
/// The two palettes carry the light and dark accent colors of the desktop
/// surface this data core was written for.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub value: Color,
    pub confirmed: Color,
    pub deaths: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            text: Color::Rgb {
                r: 0x23,
                g: 0x4b,
                b: 0x8a,
            },
            value: Color::Rgb {
                r: 0x0b,
                g: 0x51,
                b: 0xa1,
            },
            confirmed: Color::Rgb {
                r: 0x4a,
                g: 0x90,
                b: 0xe2,
            },
            deaths: Color::Rgb {
                r: 0xff,
                g: 0x6b,
                b: 0x6b,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            text: Color::White,
            value: Color::Rgb {
                r: 0x4a,
                g: 0xc1,
                b: 0xff,
            },
            confirmed: Color::Rgb {
                r: 0x7e,
                g: 0xc0,
                b: 0xff,
            },
            deaths: Color::Rgb {
                r: 0xff,
                g: 0x99,
                b: 0x99,
            },
        }
    }

    pub fn metric_color(&self, metric: Metric) -> Color {
        match metric {
            Metric::Confirmed => self.confirmed,
            Metric::Deaths => self.deaths,
            Metric::Recovered | Metric::Active => self.value,
        }
    }
}

/// Print the four KPI cards with abbreviated values.
pub fn kpi_cards(snapshot: &KpiSnapshot, filter: Option<&str>, theme: &Theme) {
    match filter.filter(|value| !value.is_empty()) {
        Some(country) => println!("KPIs - {country}"),
        None => println!("KPIs - All countries"),
    }
    let mut table = Table::new();
    table.set_header(
        Metric::ALL
            .iter()
            .map(|metric| header_cell(metric.as_str(), theme))
            .collect::<Vec<_>>(),
    );
    apply_card_style(&mut table);
    table.add_row(
        snapshot
            .entries()
            .iter()
            .map(|(_, value)| value_cell(*value, theme))
            .collect::<Vec<_>>(),
    );
    for column in 0..Metric::ALL.len() {
        align_column(&mut table, column, CellAlignment::Center);
    }
    println!("{table}");
}

/// Print one comparative ranking as a horizontal bar chart.
pub fn ranking_chart(ranking: &Ranking, theme: &Theme) {
    println!();
    println!(
        "Top {} Countries - {}",
        ranking.entries.len(),
        ranking.metric
    );
    if ranking.entries.is_empty() {
        println!("(no data)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country", theme),
        header_cell(ranking.metric.as_str(), theme),
        Cell::new(""),
    ]);
    apply_chart_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let max = ranking.max_value();
    let color = theme.metric_color(ranking.metric);
    for entry in &ranking.entries {
        table.add_row(vec![
            Cell::new(&entry.country),
            Cell::new(entry.value),
            bar_cell(entry.value, max, color),
        ]);
    }
    println!("{table}");
}

/// Print the projected data grid, unabbreviated and center-aligned.
pub fn data_grid(projection: &TableProjection, theme: &Theme) {
    println!();
    println!("Data Table");
    let mut table = Table::new();
    table.set_header(
        TABLE_HEADERS
            .iter()
            .map(|label| header_cell(label, theme))
            .collect::<Vec<_>>(),
    );
    apply_grid_style(&mut table);
    for column in 0..projection.column_count() {
        align_column(
            &mut table,
            column,
            cell_alignment(projection.alignment(0, column)),
        );
    }
    for row in projection.rows() {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    println!("{table}");
}

/// Shared style for plain listing tables (`metrics`).
pub fn apply_listing_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_card_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_chart_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_grid_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn cell_alignment(alignment: Alignment) -> CellAlignment {
    match alignment {
        Alignment::Left => CellAlignment::Left,
        Alignment::Center => CellAlignment::Center,
        Alignment::Right => CellAlignment::Right,
    }
}

fn header_cell(label: &str, theme: &Theme) -> Cell {
    Cell::new(label)
        .fg(theme.text)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: u64, theme: &Theme) -> Cell {
    Cell::new(human_format(value as f64))
        .fg(theme.value)
        .add_attribute(Attribute::Bold)
}

fn bar_cell(value: u64, max: u64, color: Color) -> Cell {
    let length = bar_length(value, max);
    if length == 0 {
        return Cell::new("");
    }
    Cell::new("█".repeat(length)).fg(color)
}

/// Scale a value into a bar length against the chart maximum. Non-zero
/// values always get at least one block.
fn bar_length(value: u64, max: u64) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let scaled = (value as u128 * BAR_WIDTH as u128 / max as u128) as usize;
    scaled.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_length_scales_against_the_maximum() {
        assert_eq!(bar_length(100, 100), BAR_WIDTH);
        assert_eq!(bar_length(50, 100), BAR_WIDTH / 2);
        assert_eq!(bar_length(0, 100), 0);
        assert_eq!(bar_length(1, 1_000_000), 1);
        assert_eq!(bar_length(5, 0), 0);
    }

    #[test]
    fn themes_color_the_chart_metrics_distinctly() {
        let theme = Theme::light();
        assert_ne!(
            format!("{:?}", theme.metric_color(Metric::Confirmed)),
            format!("{:?}", theme.metric_color(Metric::Deaths))
        );
    }
}
