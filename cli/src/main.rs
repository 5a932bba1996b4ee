use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use skipro_web::config::ApiConfig;
use skipro_web::net::auth::AuthRepository;
use skipro_web::net::client::ApiClient;
use skipro_web::net::lessons::LessonRepository;
use skipro_web::net::types::NewLesson;
use skipro_web::util::jwt;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing client id; pass --client-id or a token carrying an `id` claim")]
    MissingClientId,
    #[error("missing token; pass --token or set SKIPRO_TOKEN")]
    MissingToken,
    #[error("token payload could not be decoded")]
    UndecodableToken,
    #[error("http client build failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<String> for CliError {
    fn from(message: String) -> Self {
        Self::Api(message)
    }
}

#[derive(Parser, Debug)]
#[command(name = "skipro-cli", about = "Ski school lesson booking CLI")]
struct Cli {
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Compact token from `login`; supplies the client id when none is given.
    #[arg(long, env = "SKIPRO_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token.
    Login {
        /// `FirstName.LastName`
        #[arg(long)]
        full_name: String,
        #[arg(long, env = "SKIPRO_PASSWORD")]
        password: String,
    },
    /// Show the claims of the current token (unverified).
    Whoami,
    Lessons(LessonsCommand),
    Instructors,
}

#[derive(Args, Debug)]
struct LessonsCommand {
    #[command(subcommand)]
    command: LessonsSubcommand,
}

#[derive(Args, Debug)]
struct ClientArg {
    #[arg(long)]
    client_id: Option<String>,
}

#[derive(Subcommand, Debug)]
enum LessonsSubcommand {
    Enrolled(ClientArg),
    Planned(ClientArg),
    Finished(ClientArg),
    Enroll {
        lesson_id: Uuid,
        #[command(flatten)]
        client: ClientArg,
    },
    Remove {
        lesson_id: Uuid,
        #[command(flatten)]
        client: ClientArg,
    },
    Clients {
        lesson_id: Uuid,
    },
    Create {
        /// ISO local date-time, e.g. `2025-01-20T10:00:00`.
        #[arg(long)]
        time: String,
        /// ISO-8601 duration, e.g. `PT1H30M`.
        #[arg(long, default_value = "PT1H")]
        duration: String,
        #[arg(long)]
        instructor_id: Uuid,
        #[arg(long)]
        capacity: Option<u32>,
    },
}

#[derive(Debug, Clone)]
struct CliContext {
    token: Option<String>,
    lessons: LessonRepository,
    auth: AuthRepository,
}

impl CliContext {
    /// Explicit id wins; otherwise the token's `id` claim.
    fn client_id(&self, explicit: Option<String>) -> Result<String, CliError> {
        if let Some(id) = explicit {
            return Ok(id);
        }
        let id = jwt::get_client_id_from_token(self.token.as_deref()).ok_or(CliError::MissingClientId)?;
        tracing::debug!(client_id = %id, "client id taken from token");
        Ok(id)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&ApiConfig::new(&cli.base_url))?;
    tracing::debug!(backend = %api.base_url(), "backend client ready");
    let ctx = CliContext {
        token: cli.token,
        lessons: LessonRepository::new(api.clone()),
        auth: AuthRepository::new(api),
    };

    match cli.command {
        Command::Login { full_name, password } => run_login(&ctx, &full_name, &password).await,
        Command::Whoami => run_whoami(&ctx),
        Command::Lessons(lessons) => run_lessons(&ctx, lessons.command).await,
        Command::Instructors => print_json(&ctx.lessons.get_instructors().await?),
    }
}

async fn run_login(ctx: &CliContext, full_name: &str, password: &str) -> Result<(), CliError> {
    let token = ctx.auth.login(full_name, password).await?;
    println!("{token}");
    Ok(())
}

fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    let token = ctx.token.as_deref().ok_or(CliError::MissingToken)?;
    let claims = jwt::decode_claims(Some(token)).ok_or(CliError::UndecodableToken)?;
    print_json(&claims)
}

async fn run_lessons(ctx: &CliContext, command: LessonsSubcommand) -> Result<(), CliError> {
    match command {
        LessonsSubcommand::Enrolled(arg) => {
            let client_id = ctx.client_id(arg.client_id)?;
            print_json(&ctx.lessons.get_lessons_for_client(&client_id).await?)
        }
        LessonsSubcommand::Planned(arg) => {
            let client_id = ctx.client_id(arg.client_id)?;
            print_json(&ctx.lessons.get_planned_lessons(&client_id).await?)
        }
        LessonsSubcommand::Finished(arg) => {
            let client_id = ctx.client_id(arg.client_id)?;
            print_json(&ctx.lessons.get_finished_lessons(&client_id).await?)
        }
        LessonsSubcommand::Enroll { lesson_id, client } => {
            let client_id = ctx.client_id(client.client_id)?;
            ctx.lessons.enroll_lesson(&lesson_id.to_string(), &client_id).await?;
            println!("enrolled in {lesson_id}");
            Ok(())
        }
        LessonsSubcommand::Remove { lesson_id, client } => {
            let client_id = ctx.client_id(client.client_id)?;
            ctx.lessons.remove_lesson(&lesson_id.to_string(), &client_id).await?;
            println!("removed from {lesson_id}");
            Ok(())
        }
        LessonsSubcommand::Clients { lesson_id } => {
            print_json(&ctx.lessons.get_lesson_clients(&lesson_id.to_string()).await?)
        }
        LessonsSubcommand::Create { time, duration, instructor_id, capacity } => {
            let lesson = NewLesson { time, duration, instructor_id, capacity };
            ctx.lessons.create_lesson(&lesson).await?;
            println!("lesson created");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
