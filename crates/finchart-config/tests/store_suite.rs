use chrono::NaiveDate;
use tempfile::tempdir;

use finchart_config::{ChartProfile, ChartProfileStore};
use finchart_domain::{DisplaySpec, FilterSpec, Granularity, GroupingStrategy};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_profile() -> ChartProfile {
    let filter = FilterSpec::new(date(2024, 1, 1), date(2024, 3, 31));
    let display = DisplaySpec {
        granularity: Granularity::Week,
        grouping: GroupingStrategy::ShowAll,
        include_transfers: true,
        ..DisplaySpec::default()
    };
    ChartProfile::new(filter, display)
}

#[test]
fn load_returns_defaults_when_absent() {
    let dir = tempdir().expect("temp dir");
    let store = ChartProfileStore::with_base_dir(dir.path().to_path_buf()).expect("store");

    let profile = store.load("bar-chart").expect("load");
    assert_eq!(profile.display, DisplaySpec::default());
    assert!(profile.updated_at.is_none());
}

#[test]
fn save_then_load_roundtrip() {
    let dir = tempdir().expect("temp dir");
    let store = ChartProfileStore::with_base_dir(dir.path().to_path_buf()).expect("store");
    let profile = sample_profile();

    store.save("bar-chart", &profile).expect("save");
    let loaded = store.load("bar-chart").expect("load");

    assert_eq!(loaded.filter, profile.filter);
    assert_eq!(loaded.display, profile.display);
    assert!(loaded.updated_at.is_some());
}

#[test]
fn profile_names_are_canonicalized() {
    let dir = tempdir().expect("temp dir");
    let store = ChartProfileStore::with_base_dir(dir.path().to_path_buf()).expect("store");

    let path = store.profile_path("Bar Chart");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("bar-chart.json")
    );

    store.save("Bar Chart", &sample_profile()).expect("save");
    let loaded = store.load("bar chart").expect("load");
    assert_eq!(loaded.display.granularity, Granularity::Week);
}

#[test]
fn list_returns_sorted_profile_names() {
    let dir = tempdir().expect("temp dir");
    let store = ChartProfileStore::with_base_dir(dir.path().to_path_buf()).expect("store");

    store.save("pie-chart", &sample_profile()).expect("save");
    store.save("bar-chart", &sample_profile()).expect("save");

    let names = store.list().expect("list");
    assert_eq!(names, vec!["bar-chart".to_string(), "pie-chart".to_string()]);
}
