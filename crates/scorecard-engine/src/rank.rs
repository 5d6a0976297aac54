use scorecard_core::models::entity::EntityRef;
use scorecard_core::models::outcome::{RankDirection, RankedEntity};

/// Rank entities by a selected score.
///
/// The sort is stable, so entities with equal scores keep their input order
/// and receive distinct consecutive ranks. Every input entity appears in the
/// output exactly once.
pub fn rank_entities<T, F>(
    entities: &[T],
    score: F,
    direction: RankDirection,
) -> Vec<RankedEntity>
where
    T: EntityRef,
    F: Fn(&T) -> f64,
{
    rank_order(entities, score, direction)
        .into_iter()
        .map(|(rank, entity, score)| RankedEntity {
            entity_id: entity.entity_id().to_string(),
            rank,
            score,
        })
        .collect()
}

/// Same ordering as [`rank_entities`], but yields the ranked items
/// themselves alongside their rank and score.
pub fn rank_order<T, F>(
    entities: &[T],
    score: F,
    direction: RankDirection,
) -> Vec<(u32, &T, f64)>
where
    F: Fn(&T) -> f64,
{
    let mut scored: Vec<(&T, f64)> = entities.iter().map(|e| (e, score(e))).collect();

    match direction {
        RankDirection::Descending => scored.sort_by(|a, b| b.1.total_cmp(&a.1)),
        RankDirection::Ascending => scored.sort_by(|a, b| a.1.total_cmp(&b.1)),
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (entity, score))| ((i + 1) as u32, entity, score))
        .collect()
}

/// English ordinal for a rank, e.g. `1st`, `12th`, `121st`.
pub fn ordinal_suffix(rank: u32) -> String {
    let suffix = if (11..=13).contains(&(rank % 100)) {
        "th"
    } else {
        match rank % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{rank}{suffix}")
}
