pub mod care_gap_dashboard;
pub mod provider_scorecard;
