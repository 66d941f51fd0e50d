//! `buddy-cli`: scriptable access to every buddy matching backend endpoint.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod api;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use models::endpoints::{self, API_URL_ENV, DEFAULT_API_URL, DEFAULT_MAX_RECOMMENDATIONS};
use models::error::optional;
use models::validation::{ValidationErrors, non_empty, split_tags};
use models::{
    ApiError, Availability, AwardPointsRequest, BuddyGameProfile, BuddyMatch, BuddyMatchRecommendation,
    BuddyPerformance, BuddyProfile, BuddyProfileRequest, CompatibilityScore, ConversationSummary,
    CreateEmployeeRequest, CreateMatchRequest, DashboardAnalytics, Employee, EmployeeRole, Feedback,
    FeedbackRequest, FeedbackStats, FeedbackType, LeaderboardEntry, LeaderboardKind, MarkReadRequest, Message,
    RejectMatchRequest, SendMessageRequest, TrendPoint,
};
use serde::de::IgnoredAny;

use api::ApiClient;
use output::{OutputFormat, print_list, print_value};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid API URL '{0}': expected http(s)://host[/path]")]
    InvalidApiUrl(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid request: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "buddy-cli", about = "Onboarding buddy matching API CLI")]
struct Cli {
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(subcommand)]
    Employees(EmployeeCommand),
    #[command(subcommand)]
    Buddies(BuddyCommand),
    #[command(subcommand)]
    Matching(MatchingCommand),
    #[command(subcommand)]
    Matches(MatchesCommand),
    #[command(subcommand)]
    Messages(MessagesCommand),
    #[command(subcommand)]
    Analytics(AnalyticsCommand),
    #[command(subcommand)]
    Gamification(GamificationCommand),
    #[command(subcommand)]
    Feedback(FeedbackCommand),
}

#[derive(Subcommand, Debug)]
enum EmployeeCommand {
    List {
        #[arg(long, conflicts_with = "newcomers")]
        buddy_guides: bool,
        #[arg(long)]
        newcomers: bool,
    },
    Get {
        id: i64,
    },
    Create(EmployeeArgs),
    /// Create a buddy profile through the employees resource.
    CreateBuddyProfile {
        employee_id: i64,
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Subcommand, Debug)]
enum BuddyCommand {
    List {
        #[arg(long)]
        available: bool,
    },
    Get {
        id: i64,
    },
    /// Profile of an employee; prints `null` when they have none.
    ForEmployee {
        employee_id: i64,
    },
    Create {
        employee_id: i64,
        #[command(flatten)]
        profile: ProfileArgs,
    },
    Update {
        id: i64,
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Subcommand, Debug)]
enum MatchingCommand {
    Recommend {
        newcomer_id: i64,
        /// Clamped to 1..=20.
        #[arg(long, default_value_t = DEFAULT_MAX_RECOMMENDATIONS)]
        max: u32,
    },
    Compatibility {
        buddy_id: i64,
        newcomer_id: i64,
    },
    Create {
        buddy_id: i64,
        newcomer_id: i64,
        #[arg(long)]
        notes: Option<String>,
    },
    Accept {
        match_id: i64,
    },
    Reject {
        match_id: i64,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum MatchesCommand {
    List {
        #[arg(long, conflicts_with = "newcomer")]
        buddy: Option<i64>,
        #[arg(long)]
        newcomer: Option<i64>,
    },
    Get {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum MessagesCommand {
    List {
        match_id: i64,
    },
    Send {
        match_id: i64,
        #[arg(long)]
        sender: i64,
        #[arg(long)]
        content: String,
    },
    MarkRead {
        match_id: i64,
        #[arg(long)]
        user: i64,
    },
    Conversations {
        user_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum AnalyticsCommand {
    Dashboard,
    Buddy { buddy_id: i64 },
    Trends,
}

#[derive(Subcommand, Debug)]
enum GamificationCommand {
    /// Game profile of a buddy; prints `null` when they have none.
    Profile {
        buddy_id: i64,
    },
    Leaderboard {
        /// points, streak or matches
        #[arg(default_value = "points")]
        kind: LeaderboardKind,
    },
    Award {
        buddy_id: i64,
        #[arg(long)]
        points: u32,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
enum FeedbackCommand {
    Submit {
        match_id: i64,
        #[arg(long)]
        by: i64,
        #[arg(long, value_enum)]
        direction: DirectionArg,
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    List {
        match_id: i64,
    },
    BuddyStats {
        buddy_id: i64,
    },
    OverallStats,
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    unit: String,
    #[arg(long)]
    team: Option<String>,
    #[arg(long)]
    location: String,
    /// `YYYY-MM-DD`
    #[arg(long)]
    start_date: String,
    #[arg(long, value_enum, default_value_t = RoleArg::Employee)]
    role: RoleArg,
    #[arg(long)]
    buddy_guide: bool,
    #[arg(long)]
    newcomer: bool,
    /// Comma separated.
    #[arg(long, default_value = "")]
    tech_stack: String,
    /// Comma separated.
    #[arg(long, default_value = "")]
    interests: String,
}

impl EmployeeArgs {
    fn to_request(&self) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            title: self.title.trim().to_owned(),
            unit: self.unit.trim().to_owned(),
            team: self.team.as_deref().and_then(non_empty),
            location: self.location.trim().to_owned(),
            start_date: self.start_date.trim().to_owned(),
            role: self.role.into(),
            is_buddy_guide: self.buddy_guide,
            is_newcomer: self.newcomer,
            tech_stack: split_tags(&self.tech_stack),
            interests: split_tags(&self.interests),
        }
    }
}

#[derive(Args, Debug)]
struct ProfileArgs {
    #[arg(long)]
    bio: String,
    /// Comma separated.
    #[arg(long, default_value = "")]
    specialties: String,
    /// Available, Limited or Unavailable
    #[arg(long, default_value = "Available")]
    availability: Availability,
    #[arg(long, default_value_t = 2)]
    max_active_buddies: u32,
    #[arg(long)]
    location_override: Option<String>,
    #[arg(long)]
    unit_override: Option<String>,
    /// Comma separated.
    #[arg(long)]
    tech_stack_override: Option<String>,
    /// Comma separated.
    #[arg(long)]
    interests_override: Option<String>,
}

impl ProfileArgs {
    fn to_request(&self) -> BuddyProfileRequest {
        BuddyProfileRequest {
            bio: self.bio.trim().to_owned(),
            specialties: split_tags(&self.specialties),
            availability: self.availability,
            max_active_buddies: self.max_active_buddies,
            location_override: self.location_override.as_deref().and_then(non_empty),
            unit_override: self.unit_override.as_deref().and_then(non_empty),
            tech_stack_override: self.tech_stack_override.as_deref().map(split_tags),
            interests_override: self.interests_override.as_deref().map(split_tags),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Employee,
    Hr,
}

impl From<RoleArg> for EmployeeRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Employee => Self::Employee,
            RoleArg::Hr => Self::Hr,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    NewcomerToBuddy,
    BuddyToNewcomer,
}

impl From<DirectionArg> for FeedbackType {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::NewcomerToBuddy => Self::NewcomerToBuddy,
            DirectionArg::BuddyToNewcomer => Self::BuddyToNewcomer,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = ApiClient::new(&cli.api_url)?;
    let out = cli.output;

    match cli.command {
        Command::Employees(command) => run_employees(&client, out, command).await,
        Command::Buddies(command) => run_buddies(&client, out, command).await,
        Command::Matching(command) => run_matching(&client, out, command).await,
        Command::Matches(command) => run_matches(&client, out, command).await,
        Command::Messages(command) => run_messages(&client, out, command).await,
        Command::Analytics(command) => run_analytics(&client, out, command).await,
        Command::Gamification(command) => run_gamification(&client, out, command).await,
        Command::Feedback(command) => run_feedback(&client, out, command).await,
    }
}

async fn run_employees(client: &ApiClient, out: OutputFormat, command: EmployeeCommand) -> Result<(), CliError> {
    match command {
        EmployeeCommand::List { buddy_guides, newcomers } => {
            let endpoint = if buddy_guides {
                endpoints::employees::buddy_guides()
            } else if newcomers {
                endpoints::employees::newcomers()
            } else {
                endpoints::employees::list()
            };
            let list: Vec<Employee> = client.get(endpoint).await?;
            print_list(out, &list)
        }
        EmployeeCommand::Get { id } => {
            let employee: Employee = client.get(endpoints::employees::get(id)).await?;
            print_value(&employee)
        }
        EmployeeCommand::Create(args) => {
            let created: Employee = client
                .send_valid(endpoints::employees::create(), &args.to_request())
                .await?;
            print_value(&created)
        }
        EmployeeCommand::CreateBuddyProfile { employee_id, profile } => {
            let created: BuddyProfile = client
                .send_valid(endpoints::employees::create_buddy_profile(employee_id), &profile.to_request())
                .await?;
            print_value(&created)
        }
    }
}

async fn run_buddies(client: &ApiClient, out: OutputFormat, command: BuddyCommand) -> Result<(), CliError> {
    match command {
        BuddyCommand::List { available } => {
            let endpoint = if available { endpoints::buddies::available() } else { endpoints::buddies::list() };
            let list: Vec<BuddyProfile> = client.get(endpoint).await?;
            print_list(out, &list)
        }
        BuddyCommand::Get { id } => {
            let profile: BuddyProfile = client.get(endpoints::buddies::get(id)).await?;
            print_value(&profile)
        }
        BuddyCommand::ForEmployee { employee_id } => {
            let profile = not_found_as_none(client.get::<BuddyProfile>(endpoints::buddies::by_employee(employee_id)).await)?;
            print_value(&profile)
        }
        BuddyCommand::Create { employee_id, profile } => {
            let created: BuddyProfile = client
                .send_valid(endpoints::buddies::create_for_employee(employee_id), &profile.to_request())
                .await?;
            print_value(&created)
        }
        BuddyCommand::Update { id, profile } => {
            let updated: BuddyProfile = client
                .send_valid(endpoints::buddies::update(id), &profile.to_request())
                .await?;
            print_value(&updated)
        }
    }
}

async fn run_matching(client: &ApiClient, out: OutputFormat, command: MatchingCommand) -> Result<(), CliError> {
    match command {
        MatchingCommand::Recommend { newcomer_id, max } => {
            let list: Vec<BuddyMatchRecommendation> = client
                .get(endpoints::matching::recommendations(newcomer_id, max))
                .await?;
            print_list(out, &list)
        }
        MatchingCommand::Compatibility { buddy_id, newcomer_id } => {
            let score: CompatibilityScore = client
                .get(endpoints::matching::compatibility(buddy_id, newcomer_id))
                .await?;
            print_value(&score)
        }
        MatchingCommand::Create { buddy_id, newcomer_id, notes } => {
            let request = CreateMatchRequest {
                buddy_id,
                newcomer_id,
                notes: notes.as_deref().and_then(non_empty),
            };
            let created: BuddyMatch = client.send_valid(endpoints::matching::create(), &request).await?;
            print_value(&created)
        }
        MatchingCommand::Accept { match_id } => {
            let updated: Option<BuddyMatch> = client
                .send_json(endpoints::matching::accept(match_id), &serde_json::json!({}))
                .await?;
            print_value(&updated)
        }
        MatchingCommand::Reject { match_id, reason } => {
            let request = RejectMatchRequest { reason: reason.as_deref().and_then(non_empty) };
            let updated: Option<BuddyMatch> = client.send_json(endpoints::matching::reject(match_id), &request).await?;
            print_value(&updated)
        }
    }
}

async fn run_matches(client: &ApiClient, out: OutputFormat, command: MatchesCommand) -> Result<(), CliError> {
    match command {
        MatchesCommand::List { buddy, newcomer } => {
            let endpoint = match (buddy, newcomer) {
                (Some(id), _) => endpoints::matches::by_buddy(id),
                (None, Some(id)) => endpoints::matches::by_newcomer(id),
                (None, None) => endpoints::matches::list(),
            };
            let list: Vec<BuddyMatch> = client.get(endpoint).await?;
            print_list(out, &list)
        }
        MatchesCommand::Get { id } => {
            let found: BuddyMatch = client.get(endpoints::matches::get(id)).await?;
            print_value(&found)
        }
    }
}

async fn run_messages(client: &ApiClient, out: OutputFormat, command: MessagesCommand) -> Result<(), CliError> {
    match command {
        MessagesCommand::List { match_id } => {
            let list: Vec<Message> = client.get(endpoints::messaging::for_match(match_id)).await?;
            print_list(out, &list)
        }
        MessagesCommand::Send { match_id, sender, content } => {
            let request = SendMessageRequest { match_id, sender_id: sender, content: content.trim().to_owned() };
            let sent: Message = client.send_valid(endpoints::messaging::send(), &request).await?;
            print_value(&sent)
        }
        MessagesCommand::MarkRead { match_id, user } => {
            let request = MarkReadRequest { match_id, user_id: user };
            let _: IgnoredAny = client.send_json(endpoints::messaging::mark_read(), &request).await?;
            println!("ok");
            Ok(())
        }
        MessagesCommand::Conversations { user_id } => {
            let list: Vec<ConversationSummary> = client.get(endpoints::messaging::conversations(user_id)).await?;
            print_list(out, &list)
        }
    }
}

async fn run_analytics(client: &ApiClient, out: OutputFormat, command: AnalyticsCommand) -> Result<(), CliError> {
    match command {
        AnalyticsCommand::Dashboard => {
            let analytics: DashboardAnalytics = client.get(endpoints::analytics::dashboard()).await?;
            print_value(&analytics)
        }
        AnalyticsCommand::Buddy { buddy_id } => {
            let performance: BuddyPerformance = client.get(endpoints::analytics::buddy_performance(buddy_id)).await?;
            print_value(&performance)
        }
        AnalyticsCommand::Trends => {
            let list: Vec<TrendPoint> = client.get(endpoints::analytics::trends()).await?;
            print_list(out, &list)
        }
    }
}

async fn run_gamification(client: &ApiClient, out: OutputFormat, command: GamificationCommand) -> Result<(), CliError> {
    match command {
        GamificationCommand::Profile { buddy_id } => {
            let profile =
                not_found_as_none(client.get::<BuddyGameProfile>(endpoints::gamification::profile(buddy_id)).await)?;
            print_value(&profile)
        }
        GamificationCommand::Leaderboard { kind } => {
            let list: Vec<LeaderboardEntry> = client.get(endpoints::gamification::leaderboard(kind)).await?;
            print_list(out, &list)
        }
        GamificationCommand::Award { buddy_id, points, reason } => {
            let request = AwardPointsRequest { buddy_id, points, reason: reason.trim().to_owned() };
            let _: IgnoredAny = client.send_valid(endpoints::gamification::award_points(), &request).await?;
            println!("awarded {points} points to buddy {buddy_id}");
            Ok(())
        }
    }
}

async fn run_feedback(client: &ApiClient, out: OutputFormat, command: FeedbackCommand) -> Result<(), CliError> {
    match command {
        FeedbackCommand::Submit { match_id, by, direction, rating, comment } => {
            let request = FeedbackRequest {
                match_id,
                submitted_by_id: by,
                rating,
                comment: comment.as_deref().and_then(non_empty),
                feedback_type: direction.into(),
            };
            let saved: Feedback = client.send_valid(endpoints::feedback::submit(), &request).await?;
            print_value(&saved)
        }
        FeedbackCommand::List { match_id } => {
            let list: Vec<Feedback> = client.get(endpoints::feedback::for_match(match_id)).await?;
            print_list(out, &list)
        }
        FeedbackCommand::BuddyStats { buddy_id } => {
            let stats: FeedbackStats = client.get(endpoints::feedback::buddy_stats(buddy_id)).await?;
            print_value(&stats)
        }
        FeedbackCommand::OverallStats => {
            let stats: FeedbackStats = client.get(endpoints::feedback::overall_stats()).await?;
            print_value(&stats)
        }
    }
}

/// A 404 from an optional lookup is an answer, not a failure.
fn not_found_as_none<T>(result: Result<T, CliError>) -> Result<Option<T>, CliError> {
    match result {
        Err(CliError::Api(api)) => optional::<T>(Err(api)).map_err(CliError::from),
        other => other.map(Some),
    }
}
