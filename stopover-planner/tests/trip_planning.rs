//! End-to-end trip planning against the bundled fixture data.

use chrono::{NaiveDate, NaiveDateTime};

use stopover_planner::domain::StationId;
use stopover_planner::export::{load_day_plans, save_day_plans};
use stopover_planner::navitime::MockNavitimeClient;
use stopover_planner::planner::{PlanConfig, PlanError, plan_trip};

fn fixtures() -> MockNavitimeClient {
    MockNavitimeClient::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data/mock")).unwrap()
}

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn shinagawa_to_sendai_stops_once() {
    let mock = fixtures();

    let days = plan_trip(&mock, &mock, &PlanConfig::default(), "品川", "仙台", start())
        .await
        .unwrap();

    assert_eq!(days.len(), 1);

    let names: Vec<&str> = days[0].candidates().iter().map(|c| c.name.as_str()).collect();
    // 郡山 is where the day ends; the rest were passed within 40 minutes of
    // reaching 黒磯. 氏家 was passed exactly 40 minutes before and is left out.
    assert_eq!(names, vec!["郡山", "宝積寺", "矢板", "那須塩原"]);

    let terminal = days[0].terminal().unwrap();
    assert_eq!(terminal.id, StationId::parse("00003116").unwrap());
    assert!(terminal.coord.is_known());
    assert!(!days[0].candidates()[1].coord.is_known());
}

#[tokio::test]
async fn tighter_limits_cut_earlier() {
    let mock = fixtures();
    // Elapsed time reaches 130 minutes on arrival at 宇都宮.
    let config = PlanConfig::new(120, 19).with_max_days(1);

    let days = plan_trip(&mock, &mock, &config, "品川", "仙台", start())
        .await
        .unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].terminal().unwrap().name, "上野");
    assert_eq!(days[0].len(), 1);
}

#[tokio::test]
async fn unknown_station_is_reported() {
    let mock = fixtures();

    let err = plan_trip(&mock, &mock, &PlanConfig::default(), "品川", "Atlantis", start())
        .await
        .unwrap_err();

    assert_eq!(err, PlanError::UnresolvedStations(vec!["Atlantis".to_string()]));
}

#[tokio::test]
async fn planned_trip_survives_export() {
    let mock = fixtures();
    let days = plan_trip(&mock, &mock, &PlanConfig::default(), "品川", "仙台", start())
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/stop_options.json");
    save_day_plans(&path, &days).unwrap();

    let loaded = load_day_plans(&path).unwrap();
    assert_eq!(loaded.len(), days.len());
    let ids = |plan: &stopover_planner::domain::DayPlan| -> Vec<StationId> {
        plan.candidates().iter().map(|c| c.id.clone()).collect()
    };
    assert_eq!(ids(&loaded[0]), ids(&days[0]));
}
