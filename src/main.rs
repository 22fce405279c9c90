use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use student_records::config::Config;
use student_records::enrollment::{enroll, next_sid, EnrollStudent};
use student_records::logger;
use student_records::repositories::StudentRepository;
use student_records::storage::LocalStorage;

#[derive(Parser)]
#[command(name = "student-records")]
#[command(about = "Manage student records")]
struct Cli {
    /// Path to a configuration file (defaults to ./student-records.toml or the XDG config dir)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    InitConfig {
        /// Target path (defaults to the XDG config dir)
        path: Option<String>,
    },

    #[command(flatten)]
    Records(RecordCommand),
}

#[derive(Subcommand)]
enum RecordCommand {
    /// List all active students
    List,

    /// Search active students by last name, one page at a time
    Search {
        /// Case-insensitive last name fragment
        #[arg(long, default_value = "")]
        search: String,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<u64>,
    },

    /// Print the SID the next enrolled student will receive
    NextSid,

    /// Find an active student by dni or email
    Find {
        #[arg(long)]
        dni: i64,

        #[arg(long)]
        email: String,
    },

    /// Enroll a new student with the next SID
    Add {
        #[arg(long)]
        firstname: String,

        #[arg(long)]
        lastname: String,

        #[arg(long)]
        dni: i64,

        #[arg(long)]
        email: String,
    },

    /// Soft-delete a student by id
    Delete {
        id: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig { path } => init_config(path),
        Commands::Records(command) => {
            let config = match &cli.config {
                Some(path) => Config::load_from_file(path)?,
                None => Config::load()?,
            };
            logger::init(&config.logging)?;
            run(command, &config).await
        }
    }
}

fn init_config(path: Option<String>) -> Result<()> {
    let path: PathBuf = match path {
        Some(path) => path.into(),
        None => Config::get_default_config_path()?,
    };
    Config::generate_default_config(&path)?;
    println!("{}", path.display());
    Ok(())
}

async fn run(command: RecordCommand, config: &Config) -> Result<()> {
    let storage = LocalStorage::new(&config.database).await?;
    let conn = &storage.conn;

    match command {
        RecordCommand::List => print_json(&StudentRepository::get_all(conn).await?)?,
        RecordCommand::Search {
            search,
            page,
            page_size,
        } => {
            let page_size = config.pagination.effective_page_size(page_size);
            let page = StudentRepository::find_all_with_pagination(conn, &search, page, page_size).await?;
            print_json(&page)?;
        }
        RecordCommand::NextSid => println!("{}", next_sid(conn).await?),
        RecordCommand::Find { dni, email } => {
            print_json(&StudentRepository::find_by_dni_or_email(conn, dni, &email).await?)?;
        }
        RecordCommand::Add {
            firstname,
            lastname,
            dni,
            email,
        } => {
            let request = EnrollStudent {
                firstname,
                lastname,
                dni,
                email,
            };
            print_json(&enroll(conn, request).await?)?;
        }
        RecordCommand::Delete { id } => {
            let deleted = StudentRepository::soft_delete(conn, id).await?;
            print_json(&serde_json::json!({ "id": id, "deleted": deleted }))?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
