use super::*;

#[test]
fn metric_text_per_kind() {
    assert_eq!(metric_text(LeaderboardKind::Points, 1200), "1200 pts");
    assert_eq!(metric_text(LeaderboardKind::Streak, 1), "1 day");
    assert_eq!(metric_text(LeaderboardKind::Streak, 0), "0 days");
    assert_eq!(metric_text(LeaderboardKind::Matches, 1), "1 match");
    assert_eq!(metric_text(LeaderboardKind::Matches, 6), "6 matches");
}
