mod output;

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use appointment_cell::{AppointmentBoard, HttpSyncClient};
use shared_config::AppConfig;
use shared_models::auth::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Clinic appointment management", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List doctors available for booking.
    Doctors,

    /// List appointments, optionally filtered by patient or doctor name.
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Book a new appointment.
    Book {
        #[arg(long)]
        patient: String,

        /// Doctor identifier, as shown by `clinic doctors`.
        #[arg(long)]
        doctor: String,

        /// RFC 3339 timestamp or local "YYYY-MM-DD HH:MM".
        #[arg(long)]
        at: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Delete an appointment.
    Delete { id: String },

    /// Mark an appointment as completed.
    Complete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    info!("Using clinic API at {}", config.api_base_url);

    let Some(session) = Session::from_token(config.user_id.clone(), config.access_token.clone()) else {
        bail!("Not logged in: set CLINIC_ACCESS_TOKEN to use appointment management");
    };

    let client = HttpSyncClient::new(&config, &session);
    let mut board = AppointmentBoard::activate(Some(&session), client)
        .await
        .ok_or_else(|| anyhow!("Appointment management could not be activated"))?;
    flush_notices(&mut board);

    let outcome = run(&mut board, cli.command).await;
    flush_notices(&mut board);
    outcome
}

async fn run(board: &mut AppointmentBoard<HttpSyncClient>, command: Commands) -> Result<()> {
    match command {
        Commands::Doctors => output::print_doctors(board.directory()),
        Commands::List { query } => {
            board.set_query(query);
            output::print_appointments(board);
        }
        Commands::Book { patient, doctor, at, notes } => {
            let now = Utc::now();
            let mut draft = board.new_draft(Some(doctor.as_str()), now).with_notes(notes);
            draft.patient_name = patient;
            draft.appointment_date = parse_when(&at)?;

            let created = board.book(&draft, now).await?;
            println!("Appointment scheduled.");
            output::print_card(board, &created);
        }
        Commands::Delete { id } => {
            board.remove(&id).await?;
            println!("Appointment {} deleted.", id);
        }
        Commands::Complete { id } => {
            let updated = board.complete(&id).await?;
            output::print_card(board, &updated);
        }
    }
    Ok(())
}

fn parse_when(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map_err(|_| anyhow!("Could not read date '{}', expected RFC 3339 or YYYY-MM-DD HH:MM", input))?;
    debug!("Interpreting {} as local time", naive);

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("'{}' does not exist in the local time zone", input))
}

fn flush_notices(board: &mut AppointmentBoard<HttpSyncClient>) {
    for notice in board.take_notices() {
        eprintln!("{}", notice);
    }
}
