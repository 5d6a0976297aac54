use scorecard_core::error::CoreError;
use scorecard_core::models::dataset::ScorecardDataset;
use scorecard_core::models::entity::{Entity, EntityKind};
use scorecard_core::models::observation::MetricObservation;
use scorecard_core::models::outcome::{StatusTier, TrendDirection};
use scorecard_core::models::period::Period;
use scorecard_engine::error::ScoringError;
use scorecard_engine::get_metric_set;
use scorecard_report::config::ReportConfig;
use scorecard_report::error::ReportError;
use scorecard_report::scorecard::{
    ScoreSource, average_latest, build_provider_detail, build_scorecard, executive_summary,
};

fn obs(entity: &str, metric: &str, value: f64, period: &str) -> MetricObservation {
    MetricObservation::new(entity, metric, value, period.parse::<Period>().unwrap())
}

fn dataset() -> ScorecardDataset {
    let providers = [
        ("p1", "Dr. Sarah Chen", "Family Medicine", 88.2),
        ("p2", "Dr. Michael Rodriguez", "Internal Medicine", 85.1),
        ("p3", "Dr. Emily Johnson", "Pediatrics", 90.3),
        ("p4", "Dr. James Wilson", "Family Medicine", 79.5),
        ("p5", "Dr. Lisa Patel", "Internal Medicine", 86.0),
    ];

    let mut entities: Vec<Entity> = providers
        .iter()
        .map(|(id, name, specialty, _)| {
            Entity::new(*id, *name, EntityKind::Provider).with_attribute("specialty", *specialty)
        })
        .collect();
    entities.push(Entity::new("s1", "Main Campus", EntityKind::Site));

    let mut observations: Vec<MetricObservation> = providers
        .iter()
        .map(|(id, _, _, score)| obs(id, "Overall_Score", *score, "2025-01"))
        .collect();
    observations.extend([
        obs("p1", "HEDIS_Compliance_Rate", 86.0, "2024-12"),
        obs("p1", "HEDIS_Compliance_Rate", 88.0, "2025-01"),
        obs("p1", "Gap_Closure_Rate", 70.0, "2024-12"),
        obs("p1", "Gap_Closure_Rate", 75.0, "2025-01"),
        obs("p1", "Avg_Days_To_Close", 10.0, "2025-01"),
        obs("p2", "HEDIS_Compliance_Rate", 84.0, "2024-12"),
        obs("p2", "HEDIS_Compliance_Rate", 84.0, "2025-01"),
        obs("p3", "HEDIS_Compliance_Rate", 89.0, "2025-01"),
        obs("p3", "HEDIS_Compliance_Rate", 90.0, "2024-12"),
        obs("p4", "HEDIS_Compliance_Rate", 82.0, "2024-12"),
        obs("p4", "HEDIS_Compliance_Rate", 81.0, "2025-01"),
        obs("p5", "HEDIS_Compliance_Rate", 86.5, "2025-01"),
        obs("s1", "Overall_Score", 99.0, "2025-01"),
    ]);

    ScorecardDataset::new(entities, observations)
}

#[test]
fn scorecard_ranks_providers_by_overall_score() {
    let set = get_metric_set("provider_scorecard").unwrap();
    let rows = build_scorecard(&dataset(), set.as_ref(), &ReportConfig::default()).unwrap();

    let scores: Vec<f64> = rows.iter().map(|r| r.overall_score).collect();
    assert_eq!(scores, vec![90.3, 88.2, 86.0, 85.1, 79.5]);
    let labels: Vec<&str> = rows.iter().map(|r| r.rank_label.as_str()).collect();
    assert_eq!(labels, vec!["1st", "2nd", "3rd", "4th", "5th"]);
    assert!(rows.iter().all(|r| r.score_source == ScoreSource::Observed));
    assert!(rows.iter().all(|r| r.entity_id != "s1"));
}

#[test]
fn scorecard_rows_carry_status_and_trends() {
    let set = get_metric_set("provider_scorecard").unwrap();
    let rows = build_scorecard(&dataset(), set.as_ref(), &ReportConfig::default()).unwrap();
    let row = |id: &str| rows.iter().find(|r| r.entity_id == id).unwrap();

    assert_eq!(row("p1").status, Some(StatusTier::Good));
    assert_eq!(row("p2").status, Some(StatusTier::Warning));
    assert_eq!(row("p4").status, Some(StatusTier::Poor));

    let p1 = row("p1");
    assert_eq!(p1.trends.len(), 2);
    assert_eq!(p1.trends[0].metric_name, "HEDIS_Compliance_Rate");
    assert_eq!(p1.trends[0].value, Some(88.0));
    assert_eq!(p1.trends[0].trend, TrendDirection::Up);
    assert_eq!(p1.trends[1].trend, TrendDirection::Up);
    assert_eq!(p1.attributes.get("specialty").unwrap(), "Family Medicine");

    assert_eq!(row("p2").trends[0].trend, TrendDirection::Flat);
    assert_eq!(row("p3").trends[0].trend, TrendDirection::Down);
    assert_eq!(row("p5").trends[0].trend, TrendDirection::Flat);
    assert_eq!(row("p5").trends[1].value, None);
}

#[test]
fn missing_overall_score_falls_back_to_composite() {
    let mut data = dataset();
    data.entities
        .push(Entity::new("p6", "Dr. Ana Torres", EntityKind::Provider));
    data.observations.extend([
        obs("p6", "HEDIS_Compliance_Rate", 86.0, "2025-01"),
        obs("p6", "Patient_Satisfaction", 4.5, "2025-01"),
        obs("p6", "Avg_Days_To_Close", 10.0, "2025-01"),
    ]);
    data.entities
        .push(Entity::new("p7", "Dr. New Hire", EntityKind::Provider));

    let set = get_metric_set("provider_scorecard").unwrap();
    let rows = build_scorecard(&data, set.as_ref(), &ReportConfig::default()).unwrap();

    assert_eq!(rows.len(), 6);
    let p6 = rows.iter().find(|r| r.entity_id == "p6").unwrap();
    assert_eq!(p6.score_source, ScoreSource::Composite);
    assert_eq!(p6.overall_score, 87.5);
    assert_eq!(p6.rank, 3);
    assert!(rows.iter().all(|r| r.entity_id != "p7"));
}

#[test]
fn unknown_status_metric_is_rejected() {
    let set = get_metric_set("provider_scorecard").unwrap();
    let config = ReportConfig {
        status_metric: "Not_A_Metric".to_string(),
        ..ReportConfig::default()
    };
    assert!(matches!(
        build_scorecard(&dataset(), set.as_ref(), &config),
        Err(ReportError::UnknownMetric(_))
    ));
}

#[test]
fn non_finite_overall_score_is_rejected() {
    let data = ScorecardDataset::new(
        vec![
            Entity::new("a", "Dr. Alpha", EntityKind::Provider),
            Entity::new("b", "Dr. Beta", EntityKind::Provider),
        ],
        vec![
            obs("a", "Overall_Score", 95.0, "2025-01"),
            obs("b", "Overall_Score", f64::NAN, "2025-01"),
        ],
    );

    let set = get_metric_set("provider_scorecard").unwrap();
    let result = build_scorecard(&data, set.as_ref(), &ReportConfig::default());
    assert!(matches!(
        result,
        Err(ReportError::Scoring(ScoringError::InvalidMetricValue { ref metric, .. }))
            if metric == "Overall_Score"
    ));
}

#[test]
fn duplicate_provider_ids_are_rejected() {
    let data = ScorecardDataset::new(
        vec![
            Entity::new("a", "First", EntityKind::Provider),
            Entity::new("a", "Second", EntityKind::Provider),
        ],
        vec![obs("a", "Overall_Score", 90.0, "2025-01")],
    );

    let set = get_metric_set("provider_scorecard").unwrap();
    let result = build_scorecard(&data, set.as_ref(), &ReportConfig::default());
    assert!(matches!(
        result,
        Err(ReportError::Core(CoreError::DuplicateEntity(ref id))) if id == "a"
    ));
}

#[test]
fn tied_providers_keep_their_own_rows() {
    let data = ScorecardDataset::new(
        vec![
            Entity::new("a", "Dr. Alpha", EntityKind::Provider),
            Entity::new("b", "Dr. Beta", EntityKind::Provider),
        ],
        vec![
            obs("a", "Overall_Score", 88.0, "2025-01"),
            obs("b", "Overall_Score", 88.0, "2025-01"),
        ],
    );

    let set = get_metric_set("provider_scorecard").unwrap();
    let rows = build_scorecard(&data, set.as_ref(), &ReportConfig::default()).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Alpha", "Dr. Beta"]);
    assert_eq!(rows[1].rank_label, "2nd");
}

#[test]
fn provider_detail_breakdown() {
    let set = get_metric_set("provider_scorecard").unwrap();
    let detail =
        build_provider_detail(&dataset(), set.as_ref(), &ReportConfig::default(), "p1").unwrap();

    assert_eq!(detail.display_name, "Dr. Sarah Chen");
    assert_eq!(detail.rank_label.as_deref(), Some("2nd of 5"));

    let overall = detail.overall.unwrap();
    assert_eq!(overall.score, 88.2);
    assert_eq!(overall.status, StatusTier::Good);
    assert_eq!(overall.variance.narrative, "+3.2 vs target");

    let names: Vec<&str> = detail.metrics.iter().map(|m| m.metric_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["HEDIS_Compliance_Rate", "Gap_Closure_Rate", "Avg_Days_To_Close"]
    );

    let hedis = &detail.metrics[0];
    assert_eq!(hedis.current_display, "88.0%");
    assert_eq!(hedis.target_display, "85.0%");
    assert_eq!(hedis.variance.narrative, "+3.0% vs target");
    assert_eq!(hedis.status, StatusTier::Good);
    assert_eq!(hedis.trend, TrendDirection::Up);
    assert_eq!(hedis.weight, 25.0);

    let days = &detail.metrics[2];
    assert_eq!(days.current_display, "10.0 days");
    assert_eq!(days.variance.delta, 4.0);
    assert_eq!(days.variance.narrative, "4.0 days better");
    assert_eq!(days.status, StatusTier::Good);
    assert_eq!(days.trend, TrendDirection::Flat);
}

#[test]
fn provider_detail_for_unknown_entity() {
    let set = get_metric_set("provider_scorecard").unwrap();
    assert!(matches!(
        build_provider_detail(&dataset(), set.as_ref(), &ReportConfig::default(), "nobody"),
        Err(ReportError::UnknownEntity(_))
    ));
}

#[test]
fn executive_summary_headlines() {
    let set = get_metric_set("provider_scorecard").unwrap();
    let config = ReportConfig::default();
    let rows = build_scorecard(&dataset(), set.as_ref(), &config).unwrap();
    let summary = executive_summary(&rows, &config).unwrap();

    assert_eq!(summary.provider_count, 5);
    assert!((summary.average_overall - 85.82).abs() < 1e-9);
    assert_eq!(summary.top_performer, "Dr. Emily Johnson");
    assert_eq!(summary.top_score, 90.3);
    assert_eq!(summary.above_target, 4);
    assert_eq!(summary.above_target_pct, 80.0);

    assert!(matches!(
        executive_summary(&[], &config),
        Err(ReportError::EmptyDataset)
    ));
}

#[test]
fn average_of_latest_values() {
    let data = dataset();
    let avg = average_latest(&data, "HEDIS_Compliance_Rate").unwrap();
    assert!((avg - 85.7).abs() < 1e-9);
    assert_eq!(average_latest(&data, "Patient_Satisfaction"), None);
}
