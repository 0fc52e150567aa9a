use std::path::PathBuf;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use prefs::catalog::{LocationCatalog, parse_location};
use prefs::opportunity::{OpportunityRequest, OpportunityResponse};
use prefs::{FileStore, LocationPreference, ParseError, PreferenceState, Record, Session, StorageWriteFailure};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("storage write failed: {0}")]
    Storage(#[from] StorageWriteFailure),
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] ParseError),
    #[error("`{0}` is not a \"District, State\" entry")]
    UnknownLocation(String),
    #[error("no district given and no location selected; pass --district or run `location set`")]
    MissingDistrict,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("opportunity service returned HTTP {0}")]
    ServerStatus(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "krishi", about = "Inspect and edit stored Krishi preferences")]
struct Cli {
    /// JSON file standing in for browser storage.
    #[arg(long, env = "KRISHI_STORE", default_value = "krishi-store.json")]
    store: PathBuf,

    #[arg(long, env = "KRISHI_OPPORTUNITY_URL", default_value = "http://127.0.0.1:8000")]
    opportunity_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Location(LocationCommand),
    Profile(ProfileCommand),
    Session(SessionCommand),
    Locations(LocationsCommand),
    Opportunities(OpportunitiesCommand),
}

#[derive(Args, Debug)]
struct LocationCommand {
    #[command(subcommand)]
    command: LocationSubcommand,
}

#[derive(Subcommand, Debug)]
enum LocationSubcommand {
    Show,
    Set(LocationSetArgs),
    Clear,
}

#[derive(Args, Debug)]
struct LocationSetArgs {
    /// Catalog entry such as "Akola, Maharashtra".
    #[arg(conflicts_with_all = ["region", "subregion"])]
    entry: Option<String>,

    #[arg(long, requires = "subregion")]
    region: Option<String>,

    #[arg(long, requires = "region")]
    subregion: Option<String>,

    #[arg(long)]
    locality: Option<String>,
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    Clear,
}

#[derive(Args, Debug)]
struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
enum SessionSubcommand {
    Status,
    Login,
    Logout,
    DeleteAccount,
}

#[derive(Args, Debug)]
struct LocationsCommand {
    #[command(subcommand)]
    command: LocationsSubcommand,
}

#[derive(Subcommand, Debug)]
enum LocationsSubcommand {
    Search {
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Args, Debug)]
struct OpportunitiesCommand {
    #[arg(long)]
    crop: String,

    /// Defaults to the district of the selected location.
    #[arg(long)]
    district: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::start(Rc::new(FileStore::open(&cli.store)));

    let output = match cli.command {
        Command::Location(cmd) => run_location(&mut session, cmd.command)?,
        Command::Profile(cmd) => run_profile(&mut session, cmd.command)?,
        Command::Session(cmd) => run_session(&mut session, cmd.command)?,
        Command::Locations(cmd) => run_locations(&LocationCatalog::bundled(), cmd.command),
        Command::Opportunities(cmd) => {
            let district = resolve_district(cmd.district, session.location().get())?;
            let request = OpportunityRequest::new(cmd.crop, district);
            serde_json::to_value(find_opportunities(&cli.opportunity_url, &request).await?)?
        }
    };
    print_json(&output)
}

type FileSession = Session<Rc<FileStore>>;

fn run_location(session: &mut FileSession, command: LocationSubcommand) -> Result<Value, CliError> {
    match command {
        LocationSubcommand::Show => render_state(session.location().get()),
        LocationSubcommand::Set(args) => {
            let location = resolve_location(args)?;
            session.location_mut().set_value(location)?;
            render_state(session.location().get())
        }
        LocationSubcommand::Clear => {
            session.location_mut().clear();
            Ok(Value::Null)
        }
    }
}

fn run_profile(session: &mut FileSession, command: ProfileSubcommand) -> Result<Value, CliError> {
    match command {
        ProfileSubcommand::Show => render_state(session.profile().get()),
        ProfileSubcommand::Clear => {
            session.profile_mut().clear();
            Ok(Value::Null)
        }
    }
}

fn run_session(session: &mut FileSession, command: SessionSubcommand) -> Result<Value, CliError> {
    match command {
        SessionSubcommand::Status => {}
        SessionSubcommand::Login => session.login()?,
        SessionSubcommand::Logout => session.logout(),
        SessionSubcommand::DeleteAccount => session.delete_account(),
    }
    Ok(session_status(session))
}

fn run_locations(catalog: &LocationCatalog, command: LocationsSubcommand) -> Value {
    match command {
        LocationsSubcommand::Search { query } => {
            let groups: serde_json::Map<String, Value> = catalog
                .grouped(&query)
                .into_iter()
                .map(|group| (group.region, json!(group.entries)))
                .collect();
            Value::Object(groups)
        }
    }
}

async fn find_opportunities(base_url: &str, request: &OpportunityRequest) -> Result<OpportunityResponse, CliError> {
    let url = recommendations_url(base_url);
    tracing::debug!(%url, crop = %request.crop_name, district = %request.district, "requesting opportunities");
    let response = reqwest::Client::new().post(url).json(request).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerStatus(status.as_u16()));
    }
    Ok(response.json::<OpportunityResponse>().await?)
}

fn recommendations_url(base_url: &str) -> String {
    format!("{}/recommendations", base_url.trim_end_matches('/'))
}

fn resolve_location(args: LocationSetArgs) -> Result<LocationPreference, CliError> {
    let location = match (args.entry, args.region, args.subregion) {
        (Some(entry), _, _) => parse_location(&entry).ok_or(CliError::UnknownLocation(entry))?,
        (None, Some(region), Some(subregion)) => LocationPreference::new(region.trim(), subregion.trim()),
        _ => return Err(ParseError::invalid("region", "pass an entry or both --region and --subregion").into()),
    };
    let location = match args.locality {
        Some(locality) if !locality.trim().is_empty() => location.with_locality(locality.trim()),
        _ => location,
    };
    location.validate()?;
    Ok(location)
}

fn resolve_district(explicit: Option<String>, location: &PreferenceState<LocationPreference>) -> Result<String, CliError> {
    if let Some(district) = explicit.filter(|d| !d.trim().is_empty()) {
        return Ok(district);
    }
    location.as_option().map(|l| l.subregion.clone()).ok_or(CliError::MissingDistrict)
}

fn render_state<T: Serialize>(state: &PreferenceState<T>) -> Result<Value, CliError> {
    match state {
        PreferenceState::Empty => Ok(Value::Null),
        PreferenceState::Loaded(record) => Ok(serde_json::to_value(record)?),
    }
}

fn session_status(session: &FileSession) -> Value {
    json!({
        "logged_in": session.is_logged_in(),
        "landing": session.landing().path(),
        "location": session.location().value().map(ToString::to_string),
        "has_profile": session.profile().get().is_loaded(),
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
