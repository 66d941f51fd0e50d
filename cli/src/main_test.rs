use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("buddy-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_tree_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn defaults_to_json_output() {
    let cli = parse(&["--api-url", "http://api.test", "analytics", "dashboard"]);
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(cli.api_url, "http://api.test");
    assert!(matches!(cli.command, Command::Analytics(AnalyticsCommand::Dashboard)));
}

#[test]
fn parses_recommend_with_default_max() {
    let cli = parse(&["--output", "text", "matching", "recommend", "8"]);
    assert_eq!(cli.output, OutputFormat::Text);
    match cli.command {
        Command::Matching(MatchingCommand::Recommend { newcomer_id, max }) => {
            assert_eq!(newcomer_id, 8);
            assert_eq!(max, DEFAULT_MAX_RECOMMENDATIONS);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_leaderboard_kind() {
    let cli = parse(&["gamification", "leaderboard", "streak"]);
    assert!(matches!(
        cli.command,
        Command::Gamification(GamificationCommand::Leaderboard { kind: LeaderboardKind::Streak })
    ));
    assert!(Cli::try_parse_from(["buddy-cli", "gamification", "leaderboard", "rating"]).is_err());
}

#[test]
fn matches_list_filters_are_exclusive() {
    assert!(Cli::try_parse_from(["buddy-cli", "matches", "list", "--buddy", "1", "--newcomer", "2"]).is_err());
    let cli = parse(&["matches", "list", "--newcomer", "2"]);
    assert!(matches!(
        cli.command,
        Command::Matches(MatchesCommand::List { buddy: None, newcomer: Some(2) })
    ));
}

#[test]
fn feedback_direction_maps_to_type() {
    let cli = parse(&[
        "feedback", "submit", "11", "--by", "8", "--direction", "buddy-to-newcomer", "--rating", "4",
    ]);
    match cli.command {
        Command::Feedback(FeedbackCommand::Submit { direction, rating, comment, .. }) => {
            assert_eq!(FeedbackType::from(direction), FeedbackType::BuddyToNewcomer);
            assert_eq!(rating, 4);
            assert_eq!(comment, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn profile_args_build_request() {
    let cli = parse(&[
        "buddies",
        "update",
        "3",
        "--bio",
        "  Happy to help ",
        "--specialties",
        "Onboarding, Rust, rust",
        "--availability",
        "limited",
        "--max-active-buddies",
        "4",
        "--tech-stack-override",
        "Go;Elixir",
        "--location-override",
        " ",
    ]);
    let Command::Buddies(BuddyCommand::Update { id, profile }) = cli.command else {
        panic!("expected buddies update");
    };
    assert_eq!(id, 3);
    let request = profile.to_request();
    assert_eq!(request.bio, "Happy to help");
    assert_eq!(request.specialties, ["Onboarding", "Rust"]);
    assert_eq!(request.availability, Availability::Limited);
    assert_eq!(request.max_active_buddies, 4);
    assert_eq!(request.tech_stack_override, Some(vec!["Go".to_owned(), "Elixir".to_owned()]));
    assert_eq!(request.location_override, None);
    assert_eq!(request.interests_override, None);
}

#[test]
fn employee_args_build_request() {
    let cli = parse(&[
        "employees",
        "create",
        "--first-name",
        "Grace",
        "--last-name",
        "Hopper",
        "--email",
        "grace@example.com",
        "--title",
        "Engineer",
        "--unit",
        "Platform",
        "--location",
        "Berlin",
        "--start-date",
        "2024-05-01",
        "--role",
        "hr",
        "--newcomer",
        "--interests",
        "Sailing",
    ]);
    let Command::Employees(EmployeeCommand::Create(args)) = cli.command else {
        panic!("expected employees create");
    };
    let request = args.to_request();
    assert_eq!(request.role, EmployeeRole::Hr);
    assert!(request.is_newcomer);
    assert!(!request.is_buddy_guide);
    assert_eq!(request.team, None);
    assert_eq!(request.interests, ["Sailing"]);
    assert!(request.tech_stack.is_empty());
}

#[test]
fn base_url_must_be_absolute_http() {
    assert_eq!(api::normalize_base_url(" http://localhost:5000/api/ ").unwrap(), "http://localhost:5000/api");
    assert_eq!(api::normalize_base_url("https://buddy.example.com").unwrap(), "https://buddy.example.com");
    assert!(matches!(api::normalize_base_url("localhost:5000"), Err(CliError::InvalidApiUrl(_))));
    assert!(matches!(api::normalize_base_url("http://"), Err(CliError::InvalidApiUrl(_))));
}

#[test]
fn endpoint_urls_join_against_base() {
    let client = ApiClient::new("http://api.test/api/").unwrap();
    let url = endpoints::matching::recommendations(8, 50).url(client.base_url());
    assert_eq!(url, "http://api.test/api/matching/recommendations/8?maxRecommendations=20");
}

#[test]
fn not_found_lookup_becomes_none() {
    let missing: Result<u8, CliError> = Err(ApiError::from_status(404, "").into());
    assert!(matches!(not_found_as_none(missing), Ok(None)));

    let failed: Result<u8, CliError> = Err(ApiError::from_status(500, "boom").into());
    assert!(matches!(not_found_as_none(failed), Err(CliError::Api(_))));

    assert!(matches!(not_found_as_none(Ok(7u8)), Ok(Some(7))));
}

#[tokio::test]
async fn run_returns_errors_to_main() {
    let bad_url = run(parse(&["--api-url", "ftp://api.test", "analytics", "dashboard"])).await;
    assert!(matches!(bad_url, Err(CliError::InvalidApiUrl(_))));

    // Nothing listens on the discard port, so the request never gets a response.
    let unreachable = run(parse(&["--api-url", "http://127.0.0.1:9", "analytics", "dashboard"])).await;
    assert!(matches!(unreachable, Err(CliError::Api(ApiError::Network(_)))));
}

#[test]
fn parses_mark_read_and_award_flags() {
    let cli = parse(&["messages", "mark-read", "12", "--user", "8"]);
    assert!(matches!(cli.command, Command::Messages(MessagesCommand::MarkRead { match_id: 12, user: 8 })));

    let cli = parse(&["gamification", "award", "5", "--points", "50", "--reason", "Great onboarding"]);
    let Command::Gamification(GamificationCommand::Award { buddy_id, points, reason }) = cli.command else {
        panic!("expected gamification award");
    };
    assert_eq!((buddy_id, points, reason.as_str()), (5, 50, "Great onboarding"));
}
