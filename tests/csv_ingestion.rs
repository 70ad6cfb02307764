use olympics_dashboard::dataset::{Medal, Season, Sex};
use olympics_dashboard::ingestion::csv::{ingest_athletes_from_path, ingest_athletes_from_reader};
use olympics_dashboard::DashboardError;

const FIXTURE: &str = "tests/fixtures/athlete_events.csv";

#[test]
fn ingest_athletes_from_path_happy_path() {
    let ds = ingest_athletes_from_path(FIXTURE).unwrap();

    assert_eq!(ds.len(), 23);
    let first = &ds.records()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name.as_deref(), Some("Dawn Fraser"));
    assert_eq!(first.sex, Sex::Female);
    assert_eq!(first.age, Some(19.0));
    assert_eq!(first.noc, "AUS");
    assert_eq!(first.year, 1956);
    assert_eq!(first.season, Season::Summer);
    assert_eq!(first.medal, Some(Medal::Gold));
}

#[test]
fn ingest_athletes_treats_na_as_missing() {
    let ds = ingest_athletes_from_path(FIXTURE).unwrap();

    let beaurepaire = ds.iter().find(|r| r.id == 3).unwrap();
    assert_eq!(beaurepaire.age, None);
    assert_eq!(beaurepaire.noc, "ANZ");

    let no_medal = ds.iter().filter(|r| r.medal.is_none()).count();
    assert_eq!(no_medal, 3);
}

#[test]
fn ingest_athletes_allows_reordered_columns() {
    let input = "NOC,Medal,Sport,Season,Year,Team,Age,Sex,ID\nSWE,Silver,Shooting,Summer,1920,Sweden,72,M,17\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = ingest_athletes_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.len(), 1);
    let r = &ds.records()[0];
    assert_eq!(r.id, 17);
    assert_eq!(r.age, Some(72.0));
    assert_eq!(r.medal, Some(Medal::Silver));
    assert_eq!(r.name, None);
}

#[test]
fn ingest_athletes_errors_on_missing_required_column() {
    let input = "ID,Sex,Age,Team,NOC,Year,Season,Sport\n1,M,24,China,CHN,1992,Summer,Judo\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_athletes_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema violation"));
    assert!(msg.contains("missing required column 'Medal'"));
}

#[test]
fn ingest_athletes_errors_on_number_parse() {
    let input = "ID,Sex,Age,Team,NOC,Year,Season,Sport,Medal\n1,M,24,China,CHN,nineteen,Summer,Judo,NA\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_athletes_from_reader(&mut rdr).unwrap_err();
    match err {
        DashboardError::ParseError {
            row, column, raw, ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Year");
            assert_eq!(raw, "nineteen");
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn ingest_athletes_errors_on_unknown_medal() {
    let input = "ID,Sex,Age,Team,NOC,Year,Season,Sport,Medal\n1,M,24,China,CHN,1992,Summer,Judo,Platinum\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_athletes_from_reader(&mut rdr).unwrap_err();
    assert!(matches!(err, DashboardError::SchemaViolation { .. }));
    assert!(err.to_string().contains("column 'Medal'"));
}

#[test]
fn ingest_athletes_rejects_unbounded_ages() {
    for age in ["inf", "1e13"] {
        let input = format!(
            "ID,Sex,Age,Team,NOC,Year,Season,Sport,Medal\n\
             1,M,20,Sweden,SWE,1912,Summer,Tug-Of-War,Gold\n\
             2,M,{age},Sweden,SWE,1912,Summer,Tug-Of-War,Gold\n"
        );
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());

        let err = ingest_athletes_from_reader(&mut rdr).unwrap_err();
        assert!(matches!(err, DashboardError::SchemaViolation { .. }));
        assert!(err.to_string().contains("row 3 column 'Age'"));
    }
}
