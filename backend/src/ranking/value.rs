use crate::domain::Player;

use super::types::Score;

const RUN_WEIGHT: Score = 1;
const WICKET_WEIGHT: Score = 20;
const CATCH_WEIGHT: Score = 5;
const AWARD_WEIGHT: Score = 100;

/// Composite player value: runs + 20*wickets + 5*catches + 100*awards
///
/// Widened to `i128` so any combination of `i64` stats fits without overflow.
pub fn value_score(player: &Player) -> Score {
    RUN_WEIGHT * Score::from(player.runs)
        + WICKET_WEIGHT * Score::from(player.wickets)
        + CATCH_WEIGHT * Score::from(player.catches)
        + AWARD_WEIGHT * Score::from(player.man_of_match_awards)
}
