// src/bin/vault_cli.rs
//! Command-line front end for password-vault

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use password_vault::config::{self, Config};
use password_vault::consts::CONFIG_PATH_ENV;
use password_vault::export::default_file_name;
use password_vault::{
    ExportFormat, ImportMode, ImportPolicy, NewRecord, PasswordVault, Record, RecordPatch,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Local password store with CSV/JSON/AES import and export.
#[derive(Parser, Debug)]
#[command(name = "vault-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (TOML). Defaults to the platform config dir.
    #[arg(long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Database file, overriding the configured one.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a record.
    Add {
        #[arg(long)]
        website: String,

        #[arg(long)]
        username: String,

        /// Prompted for when omitted, to keep it out of shell history.
        #[arg(long)]
        password: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,

        /// Duplicate handling; defaults to the configured import policy.
        #[arg(long)]
        policy: Option<ImportPolicy>,
    },

    /// List every record, ordered by website.
    List {
        /// Print passwords instead of masking them.
        #[arg(long)]
        show: bool,
    },

    /// Find records whose website contains KEYWORD (case-insensitive).
    Search {
        keyword: String,

        #[arg(long)]
        show: bool,
    },

    /// Change one or more fields of a record.
    Update {
        id: i64,

        #[arg(long)]
        website: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete records by id. Nothing is deleted unless every id exists.
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Export all records.
    Export {
        /// csv, json or aes
        #[arg(long)]
        format: ExportFormat,

        /// Output file. Defaults to <export dir>/<name>.<format>.
        #[arg(long, conflicts_with = "name")]
        out: Option<PathBuf>,

        /// File name without extension, placed in the export dir.
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Import records from a CSV, JSON or AES export.
    Import {
        path: PathBuf,

        /// Inferred from the file extension when omitted.
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Override or Skip; defaults to the configured policy.
        #[arg(long)]
        policy: Option<ImportPolicy>,

        /// Import everything in one transaction or nothing at all.
        #[arg(long)]
        atomic: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut conf = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(db) = cli.db {
        conf.storage.db_path = db;
    }

    let vault = PasswordVault::from_config(&conf).with_context(|| {
        format!(
            "Failed to open password database at {}",
            conf.storage.db_path.display()
        )
    })?;

    run(cli.command, &vault, &conf)
}

fn run(command: Commands, vault: &PasswordVault, conf: &Config) -> Result<()> {
    match command {
        Commands::Add {
            website,
            username,
            password,
            notes,
            policy,
        } => {
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            let rec = NewRecord::new(website, username, password, notes);
            rec.validate()?;
            let policy = policy.unwrap_or(conf.import.policy);
            let id = vault.add_record(&rec, policy.overrides())?;
            println!("Added record {id}");
        }

        Commands::List { show } => print_records(&vault.get_all()?, show),

        Commands::Search { keyword, show } => print_records(&vault.search(keyword.trim())?, show),

        Commands::Update {
            id,
            website,
            username,
            password,
            notes,
        } => {
            let mut patch = RecordPatch::new();
            if let Some(v) = website {
                patch = patch.website(v.trim());
            }
            if let Some(v) = username {
                patch = patch.username(v.trim());
            }
            if let Some(v) = password {
                patch = patch.password(v);
            }
            if let Some(v) = notes {
                patch = patch.notes(v);
            }
            if patch.is_empty() {
                bail!("Nothing to update; pass at least one of --website/--username/--password/--notes");
            }
            if vault.update_record(id, &patch)? == 0 {
                bail!("No record with id {id}");
            }
            println!("Updated record {id}");
        }

        Commands::Delete { ids } => {
            if !vault.delete_records(&ids)? {
                bail!("Nothing deleted: one or more ids do not exist");
            }
            println!("Deleted {} record(s)", ids.len());
        }

        Commands::Export {
            format,
            out,
            name,
            force,
        } => {
            let path = match out {
                Some(p) => p,
                None => {
                    let stem = name.unwrap_or_else(|| default_file_name(&chrono::Local::now()));
                    conf.export.target_path(&stem, format)
                }
            };
            ensure_writable(&path, force)?;
            let count = vault
                .export(&path, format)
                .with_context(|| format!("Export to {} failed", path.display()))?;
            println!("Exported {count} record(s) → {}", path.display());
            if format != ExportFormat::Aes {
                println!("SECURITY: this file holds every password in plaintext.");
            }
        }

        Commands::Import {
            path,
            format,
            policy,
            atomic,
        } => {
            let format = match format {
                Some(f) => f,
                None => ExportFormat::from_path(&path)?,
            };
            let mut settings = conf.import;
            if let Some(p) = policy {
                settings.policy = p;
            }
            if atomic {
                settings.mode = ImportMode::AllOrNothing;
            }
            info!(path = %path.display(), %format, ?settings, "starting import");
            let report = vault
                .import(&path, format, &settings)
                .with_context(|| format!("Import from {} failed", path.display()))?;
            println!(
                "Imported {} record(s), skipped {} malformed, {} failed",
                report.imported, report.skipped, report.failed
            );
        }
    }
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            bail!("Export directory {} does not exist", dir.display())
        }
        _ => Ok(()),
    }
}

fn print_records(records: &[Record], show: bool) {
    if records.is_empty() {
        println!("No records.");
        return;
    }
    println!(
        "{:>5}  {:<30}  {:<24}  {:<20}  Notes",
        "ID", "Website", "Username", "Password"
    );
    for r in records {
        let password = if show { r.password.as_str() } else { "********" };
        println!(
            "{:>5}  {:<30}  {:<24}  {:<20}  {}",
            r.id,
            r.website,
            r.username,
            password,
            r.notes_or_empty()
        );
    }
}
