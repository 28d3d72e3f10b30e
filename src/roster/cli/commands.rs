//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place
//! that reads the terminal, prints, or decides exit codes.
//!
//! ## Flow
//!
//! 1. Parse arguments (`setup.rs`)
//! 2. Resolve the scope directory, load config, open the `FileStore`
//! 3. Log in: flags first, otherwise prompt on the terminal
//! 4. Dispatch to a `handle_*` function, which calls `RosterApi` and prints
//!    the returned `CmdResult`
//!
//! Every command needs a successful login, including the read-only ones.

use super::render::{print_found, print_messages, print_records};
use super::setup::{direction, Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi, SearchMethod};
use roster::config::RosterConfig;
use roster::error::{RosterError, Result};
use roster::logging::{init_logging, level_for_verbosity};
use roster::model::{Scope, SortAlgorithm, SortDirection, SortKey};
use roster::session::{Credentials, Session};
use roster::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: RosterApi<FileStore>,
    session: Session,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(level_for_verbosity(cli.verbose)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            npm,
            nama,
            prodi,
            kelas,
        }) => handle_add(&mut ctx, &npm, &nama, &prodi, &kelas),
        Some(Commands::Update {
            npm,
            nama,
            prodi,
            kelas,
        }) => handle_update(&mut ctx, &npm, &nama, &prodi, &kelas),
        Some(Commands::Delete { npm }) => handle_delete(&mut ctx, &npm),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { npm, method }) => handle_search(&mut ctx, &npm, method.into()),
        Some(Commands::Sort {
            algorithm,
            by,
            desc,
            persist,
        }) => handle_sort(&mut ctx, by.into(), algorithm.into(), direction(desc), persist),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };
    let scope_dir = scope_dir(scope)?;
    let config = RosterConfig::load(&scope_dir)?;

    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&scope_dir));
    log::debug!("using record file {}", data_path.display());

    let session = login(&config.credentials, cli.user.clone(), cli.password.clone())?;
    let api = RosterApi::new(FileStore::new(data_path), scope_dir);

    Ok(AppContext { api, session })
}

fn scope_dir(scope: Scope) -> Result<PathBuf> {
    match scope {
        Scope::Project => Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        Scope::Global => ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| RosterError::Config("could not determine the data directory".into())),
    }
}

fn login(
    credentials: &Credentials,
    user: Option<String>,
    password: Option<String>,
) -> Result<Session> {
    let term = Term::stderr();
    let needs_prompt = user.is_none() || password.is_none();
    if needs_prompt && !term.is_term() {
        log::warn!("no terminal to prompt for credentials");
        return Err(RosterError::Unauthenticated);
    }

    let user = match user {
        Some(u) => u,
        None => {
            term.write_str("Username: ")?;
            term.read_line()?
        }
    };
    let password = match password {
        Some(p) => p,
        None => {
            term.write_str("Password: ")?;
            term.read_secure_line()?
        }
    };

    Session::login(credentials, &user, &password)
}

fn handle_add(ctx: &mut AppContext, npm: &str, nama: &str, prodi: &str, kelas: &str) -> Result<()> {
    let result = ctx.api.add_record(&ctx.session, npm, nama, prodi, kelas)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    npm: &str,
    nama: &str,
    prodi: &str,
    kelas: &str,
) -> Result<()> {
    let result = ctx.api.update_record(&ctx.session, npm, nama, prodi, kelas)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, npm: &str) -> Result<()> {
    let result = ctx.api.delete_record(&ctx.session, npm)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, npm: &str, method: SearchMethod) -> Result<()> {
    let result = match method {
        SearchMethod::Linear => ctx.api.search_linear(npm),
        SearchMethod::Binary => ctx.api.search_binary(npm),
    };
    for student in &result.listed_records {
        print_found(student);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(
    ctx: &mut AppContext,
    by: SortKey,
    algorithm: SortAlgorithm,
    direction: SortDirection,
    persist: bool,
) -> Result<()> {
    let result = ctx.api.sort_by(by, algorithm, direction);
    print_records(&result.listed_records);
    print_messages(&result.messages);

    if persist {
        let saved = ctx.api.save(&ctx.session)?;
        print_messages(&saved.messages);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(&ctx.session, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in RosterConfig::keys() {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
