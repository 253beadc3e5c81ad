use clap::Parser;
use colored::*;
use contactbook::api::{ConfigAction, ContactUpdate, ContactsApi};
use contactbook::config::ContactsConfig;
use contactbook::error::{ContactsError, Result};
use contactbook::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod args;
mod menu;
mod print;
use args::{Cli, Commands};
use print::{print_contacts, print_messages, print_stats};

const HOME_ENV: &str = "CONTACTBOOK_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ContactsApi<FileStore>,
    config: ContactsConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            phone,
            email,
            group,
        }) => handle_add(&mut ctx, name, phone, email, group),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Update {
            name,
            phone,
            email,
            group,
        }) => handle_update(&mut ctx, name, phone, email, group),
        Some(Commands::Delete { name, yes }) => handle_delete(&mut ctx, name, yes),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli)?;

    let config = ContactsConfig::load(&home).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        ContactsConfig::default()
    });

    let store = FileStore::new(config.data_path(&home));
    let api = ContactsApi::open(store, home)?;

    Ok(AppContext { api, config })
}

fn resolve_home(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "contactbook", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ContactsError::Config(format!(
                "could not determine a data directory; pass --home or set {}",
                HOME_ENV
            ))
        })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    phone: String,
    email: Option<String>,
    group: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .add(&name, &phone, email.as_deref(), group.as_deref())?;
    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search(&term)?;
    let mut out = io::stdout().lock();
    print_contacts(&mut out, &result.listed)?;
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    group: Option<String>,
) -> Result<()> {
    let update = ContactUpdate {
        phone,
        email,
        group,
    };
    let result = ctx.api.update(&name, &update)?;
    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: String, yes: bool) -> Result<()> {
    // Fail on unknown names before asking anything.
    let found = ctx.api.get(&name)?;
    let key = found
        .listed
        .first()
        .map(|e| e.name.clone())
        .unwrap_or_else(|| name.clone());

    let confirmed = yes || confirm(&format!("Delete {}? (y/n): ", key))?;
    let result = ctx.api.delete(&name, confirmed)?;
    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_all()?;
    let mut out = io::stdout().lock();
    print_contacts(&mut out, &result.listed)?;
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| ctx.config.export_path());
    let result = ctx.api.export_csv(&path)?;
    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    let mut out = io::stdout().lock();
    if let Some(stats) = &result.stats {
        print_stats(&mut out, stats)?;
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    let mut out = io::stdout().lock();
    if let Some(config) = &result.config {
        writeln!(out, "data-file = {}", config.data_file)?;
        writeln!(out, "export-file = {}", config.export_file)?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let export_path = ctx.config.export_path();
    let stdin = io::stdin();
    menu::run(&mut ctx.api, &export_path, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    let mut out = io::stdout().lock();
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y"))
}
