use cdash_model::{CaseRecord, Dataset};

/// Header labels of the grid view, in column order.
pub const TABLE_HEADERS: [&str; 5] = ["Country/Region", "Confirmed", "Deaths", "Recovered", "Active"];

/// Display-alignment hint a renderer applies to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// The sorted tabular view behind the data grid.
///
/// A pure projection: fixed columns, rows ordered descending by Confirmed,
/// no live sort state. Cell values are plain string renderings; KPI-style
/// abbreviation is never applied here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProjection {
    rows: Vec<[String; 5]>,
}

impl TableProjection {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        TABLE_HEADERS.len()
    }

    pub fn header(&self, column: usize) -> Option<&'static str> {
        TABLE_HEADERS.get(column).copied()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// Every cell in this view centers, headers included.
    pub fn alignment(&self, _row: usize, _column: usize) -> Alignment {
        Alignment::Center
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String; 5]> {
        self.rows.iter()
    }
}

/// Project the dataset into the grid view.
///
/// Recomputed from the full dataset on each call; identical input yields
/// identical output.
pub fn project(dataset: &Dataset) -> TableProjection {
    let mut ordered: Vec<&CaseRecord> = dataset.records().iter().collect();
    // Stable sort: rows with equal Confirmed keep their load order.
    ordered.sort_by(|a, b| b.confirmed.cmp(&a.confirmed));
    let rows = ordered
        .iter()
        .map(|record| {
            [
                record.country.clone(),
                record.confirmed.to_string(),
                record.deaths.to_string(),
                record.recovered.to_string(),
                record.active.to_string(),
            ]
        })
        .collect();
    TableProjection { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            CaseRecord {
                country: "Italy".to_string(),
                confirmed: 30,
                deaths: 3,
                recovered: 20,
                active: 7,
            },
            CaseRecord {
                country: "USA".to_string(),
                confirmed: 100,
                deaths: 10,
                recovered: 80,
                active: 10,
            },
            CaseRecord {
                country: "Spain".to_string(),
                confirmed: 30,
                deaths: 2,
                recovered: 25,
                active: 3,
            },
        ])
    }

    #[test]
    fn rows_sort_descending_by_confirmed_with_stable_ties() {
        let projection = project(&dataset());
        let countries: Vec<&str> = (0..projection.row_count())
            .map(|row| projection.cell(row, 0).unwrap())
            .collect();
        // Italy precedes Spain: both 30 confirmed, Italy loaded first.
        assert_eq!(countries, vec!["USA", "Italy", "Spain"]);
    }

    #[test]
    fn cells_render_unabbreviated_strings() {
        let big = Dataset::new(vec![CaseRecord {
            country: "USA".to_string(),
            confirmed: 4_290_259,
            deaths: 148_011,
            recovered: 1_325_804,
            active: 2_816_444,
        }]);
        let projection = project(&big);
        assert_eq!(projection.cell(0, 1), Some("4290259"));
        assert_eq!(projection.cell(0, 4), Some("2816444"));
    }

    #[test]
    fn accessors_cover_the_fixed_schema() {
        let projection = project(&dataset());
        assert_eq!(projection.column_count(), 5);
        assert_eq!(projection.header(0), Some("Country/Region"));
        assert_eq!(projection.header(4), Some("Active"));
        assert_eq!(projection.header(5), None);
        assert_eq!(projection.cell(99, 0), None);
        assert_eq!(projection.alignment(0, 0), Alignment::Center);
    }

    #[test]
    fn projection_is_idempotent() {
        let dataset = dataset();
        assert_eq!(project(&dataset), project(&dataset));
    }
}
