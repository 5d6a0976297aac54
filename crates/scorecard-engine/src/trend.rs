use scorecard_core::models::observation::MetricObservation;
use scorecard_core::models::outcome::TrendDirection;

/// A recent value above `previous * RISE_FACTOR` is a rise; below
/// `previous * FALL_FACTOR` is a fall. The 1% band is fixed for every metric
/// and entity.
pub const RISE_FACTOR: f64 = 1.01;
pub const FALL_FACTOR: f64 = 0.99;

/// Number of observations compared when computing a trend.
pub const LOOKBACK: usize = 2;

/// Trend direction between the two most recent observations of a series.
///
/// Observations are ordered by period, not by input position. A series with
/// fewer than [`LOOKBACK`] observations has no trend and yields `Flat`.
pub fn compute_trend<'a, I>(series: I) -> TrendDirection
where
    I: IntoIterator<Item = &'a MetricObservation>,
{
    let mut recent: Option<&MetricObservation> = None;
    let mut previous: Option<&MetricObservation> = None;

    for obs in series {
        match recent {
            Some(r) if obs.period < r.period => {
                if previous.is_none_or(|p| obs.period >= p.period) {
                    previous = Some(obs);
                }
            }
            _ => {
                previous = recent;
                recent = Some(obs);
            }
        }
    }

    match (previous, recent) {
        (Some(previous), Some(recent)) => trend_between(previous.value, recent.value),
        _ => TrendDirection::Flat,
    }
}

/// Compare two raw values with the fixed noise band.
pub fn trend_between(previous: f64, recent: f64) -> TrendDirection {
    if recent > previous * RISE_FACTOR {
        TrendDirection::Up
    } else if recent < previous * FALL_FACTOR {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    }
}
