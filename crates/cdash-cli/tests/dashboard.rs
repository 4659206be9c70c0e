//! File-to-models integration: load a CSV fixture and derive every view
//! the dashboard renders.

use std::fs;

use cdash_core::{DEFAULT_TOP_N, aggregate, project, rank};
use cdash_ingest::load_dataset;
use cdash_model::Metric;

const FIXTURE: &str = "Country/Region,Confirmed,Deaths,Recovered,Active\n\
                       USA,100,10,80,10\n\
                       USA,50,5,40,5\n\
                       Italy,30,3,20,7\n";

#[test]
fn csv_to_dashboard_models() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cases.csv");
    fs::write(&path, FIXTURE).expect("write fixture");

    let dataset = load_dataset(&path).expect("load dataset");

    let snapshot = aggregate(&dataset, None);
    assert_eq!(snapshot.confirmed, 180);

    let filtered = aggregate(&dataset, Some("USA"));
    assert_eq!(filtered.deaths, 15);

    let ranking = rank(&dataset, Metric::Confirmed, DEFAULT_TOP_N);
    assert_eq!(ranking.entries.len(), 3);
    assert_eq!(ranking.entries[0].country, "USA");

    let projection = project(&dataset);
    assert_eq!(projection.row_count(), 3);
    assert_eq!(projection.cell(2, 0), Some("Italy"));

    assert_eq!(dataset.countries(), vec!["Italy", "USA"]);
}

#[test]
fn kpi_json_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cases.csv");
    fs::write(&path, FIXTURE).expect("write fixture");

    let dataset = load_dataset(&path).expect("load dataset");
    let snapshot = aggregate(&dataset, None);

    insta::assert_json_snapshot!(snapshot, @r###"
    {
      "confirmed": 180,
      "deaths": 18,
      "recovered": 140,
      "active": 22
    }
    "###);
}

#[test]
fn ranking_json_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cases.csv");
    fs::write(&path, FIXTURE).expect("write fixture");

    let dataset = load_dataset(&path).expect("load dataset");
    let ranking = rank(&dataset, Metric::Deaths, 2);

    insta::assert_json_snapshot!(ranking, @r###"
    {
      "metric": "Deaths",
      "entries": [
        {
          "country": "USA",
          "value": 10
        },
        {
          "country": "USA",
          "value": 5
        }
      ]
    }
    "###);
}
