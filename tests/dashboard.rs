use olympics_dashboard::catalog::{ChartKey, ChartKind};
use olympics_dashboard::config::DashboardConfig;
use olympics_dashboard::dashboard::Dashboard;
use olympics_dashboard::dataset::{self, Dataset};
use olympics_dashboard::dispatch::Dispatcher;
use olympics_dashboard::ingestion::csv::ingest_athletes_from_path;
use olympics_dashboard::types::Value;
use olympics_dashboard::DashboardError;

const FIXTURE: &str = "tests/fixtures/athlete_events.csv";

fn fixture_config() -> DashboardConfig {
    DashboardConfig {
        dataset_path: FIXTURE.into(),
        ..Default::default()
    }
}

#[test]
fn load_and_select_from_config() {
    let dashboard = Dashboard::load(&fixture_config()).unwrap();
    assert_eq!(dashboard.dispatcher().dataset().len(), 23);

    let spec = dashboard.select("top_ten_countries").unwrap().unwrap();
    assert_eq!(spec.key, ChartKey::TopTenCountries);
    assert_eq!(spec.title, "Top 10 countries based on total medals won");
    assert_eq!(spec.data.get(0, "NOC"), Some(&Value::from("AUS")));

    assert!(dashboard.select("none").unwrap().is_none());
    assert!(matches!(
        dashboard.select("bogus_key"),
        Err(DashboardError::InvalidSelection { .. })
    ));
}

#[test]
fn load_reports_missing_dataset() {
    let config = DashboardConfig {
        dataset_path: "tests/fixtures/does_not_exist.csv".into(),
        ..Default::default()
    };
    assert!(matches!(Dashboard::load(&config), Err(DashboardError::Csv(_))));
}

#[test]
fn render_page_returns_every_chart_in_order() {
    let dashboard = Dashboard::load(&fixture_config()).unwrap();
    let page = dashboard.render_page();

    let keys: Vec<ChartKey> = page.iter().map(|spec| spec.key).collect();
    assert_eq!(keys, ChartKey::ALL.to_vec());
    assert_eq!(page[0].kind, ChartKind::Pie);

    let options = dashboard.dropdown_options();
    assert_eq!(options.len(), page.len());
    for (option, spec) in options.iter().zip(&page) {
        assert_eq!(option.value, spec.key.as_str());
        assert_eq!(option.label, spec.title);
    }
}

#[test]
fn include_no_medal_comes_from_config() {
    let config = DashboardConfig::from_json_str(&format!(
        r#"{{ "dataset_path": "{FIXTURE}", "include_no_medal": true }}"#
    ))
    .unwrap();
    let dashboard = Dashboard::load(&config).unwrap();

    let spec = dashboard.select("age_group_medals").unwrap().unwrap();
    // Six (sex, age group) pairs, four medal categories each.
    assert_eq!(spec.data.row_count(), 24);
    let no_medal: i64 = (0..spec.data.row_count())
        .filter(|&row| spec.data.get(row, "Medal") == Some(&Value::from("No medal")))
        .filter_map(|row| spec.data.get(row, "Count").and_then(Value::as_i64))
        .sum();
    assert_eq!(no_medal, 3);
}

#[test]
fn chart_payload_serializes_to_json() {
    let dashboard = Dashboard::load(&fixture_config()).unwrap();
    let spec = dashboard.select("australian_medals_per_year").unwrap().unwrap();

    let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
    assert_eq!(json["kind"], "bar-stacked");
    assert_eq!(json["encoding"]["facet"], "Season");
    assert_eq!(json["data"]["columns"][1]["name"], "Year");
    assert_eq!(json["data"]["rows"][0][1], 1908);
}

#[test]
fn global_dataset_is_installed_once() {
    assert!(matches!(Dispatcher::from_global(), Err(DashboardError::NotLoaded)));

    let ds = ingest_athletes_from_path(FIXTURE).unwrap();
    dataset::init_global(ds).unwrap();
    assert!(matches!(
        dataset::init_global(Dataset::new(Vec::new())),
        Err(DashboardError::AlreadyLoaded)
    ));

    let dispatcher = Dispatcher::from_global().unwrap();
    assert_eq!(dispatcher.dataset().len(), 23);
    assert!(dispatcher.dispatch_key("sex_distribution").unwrap().aggregate().is_some());
}
