//! Dispatch, context setup and per-command handlers.
//!
//! Every handler drives a [`Session`] the way a form-based client would:
//! set fields, submit, print the notifications the submit queued.

use super::logging;
use super::print::{
    print_details, print_notifications, print_options, print_table, print_weather,
};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::RosterApi;
use roster::config::{RosterConfig, CONFIG_FILE_NAME};
use roster::error::{Result, RosterError};
use roster::flow::confirm::CONFIRM_WORD;
use roster::flow::session::Session;
use roster::index::RowSelector;
use roster::locations;
use roster::notifications::NotificationQueue;
use roster::store::fs_backend::FsBackend;
use roster::store::{KvDataStore, LocalStore};
use roster::validation::{validate_field, Field, FieldErrors};
use roster::weather::{OpenWeatherClient, WeatherLookup};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

struct AppContext {
    session: Session<LocalStore>,
    config: RosterConfig,
    config_file: Option<PathBuf>,
    data_dir: PathBuf,
    weather: Option<Arc<OpenWeatherClient>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Field checks and location listings need no store.
    match &cli.command {
        Some(Commands::Validate { field, value }) => return handle_validate(field, value),
        Some(Commands::Locations { country, state }) => {
            return handle_locations(country.as_deref(), state.as_deref())
        }
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add(fields)) => handle_add(&mut ctx, &fields),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Edit { selector, fields }) => handle_edit(&mut ctx, &selector, &fields),
        Some(Commands::Delete { selector, confirm }) => handle_delete(&mut ctx, &selector, confirm),
        Some(Commands::Weather { town }) => handle_weather(&ctx, &town),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::Validate { .. }) | Some(Commands::Locations { .. }) => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dirs = ProjectDirs::from("com", "roster", "roster");

    let config_file = dirs.as_ref().map(|d| d.config_dir().join(CONFIG_FILE_NAME));
    let mut config = match &config_file {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    let data_dir = config
        .data_dir
        .clone()
        .or_else(|| dirs.as_ref().map(|d| d.data_dir().to_path_buf()))
        .ok_or_else(|| RosterError::Api("Could not determine a data directory".into()))?;
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening store");

    let store = KvDataStore::new(FsBackend::new(&data_dir)).with_storage_key(&config.storage_key);
    let api = RosterApi::with_notifications(store, NotificationQueue::new(config.notification_ttl_ms));

    let weather = match config.weather.api_key() {
        Some(key) => Some(Arc::new(OpenWeatherClient::new(
            key,
            config.weather.base_url.clone(),
            config.weather.timeout(),
        )?)),
        None => {
            info!("no weather API key configured; lookups disabled");
            None
        }
    };

    let mut session = Session::new(api);
    if let Some(client) = &weather {
        session = session.with_weather(client.clone());
    }

    Ok(AppContext {
        session,
        config,
        config_file,
        data_dir,
        weather,
    })
}

fn parse_selector(s: &str) -> Result<RowSelector> {
    s.parse().map_err(RosterError::Api)
}

fn apply_fields(ctx: &mut AppContext, fields: &FieldArgs) -> Result<()> {
    for (field, value) in fields.provided() {
        ctx.session.set_field(field, value)?;
    }
    Ok(())
}

fn submit(ctx: &mut AppContext) -> Result<()> {
    if ctx.weather.is_some() {
        ctx.session.await_weather(ctx.config.weather.timeout());
    }

    let outcome = ctx.session.submit()?;

    print_notifications(&ctx.session.api_mut().take_notifications());
    print_details(&outcome.result.messages);
    if let Some(report) = &outcome.weather {
        println!();
        print_weather(report);
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: &FieldArgs) -> Result<()> {
    apply_fields(ctx, fields)?;
    submit(ctx)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_table(&ctx.session.table());
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: &str, fields: &FieldArgs) -> Result<()> {
    let selector = parse_selector(selector)?;
    ctx.session.edit_row(&selector)?;
    apply_fields(ctx, fields)?;
    submit(ctx)
}

fn handle_delete(ctx: &mut AppContext, selector: &str, confirm: Option<String>) -> Result<()> {
    let selector = parse_selector(selector)?;
    ctx.session.request_delete(&selector)?;

    let text = match confirm {
        Some(text) => text,
        None => prompt_confirmation(ctx, &selector)?,
    };
    ctx.session.type_confirmation(&text);

    match ctx.session.confirm_delete()? {
        Some(result) => {
            print_notifications(&ctx.session.api_mut().take_notifications());
            print_details(&result.messages);
            Ok(())
        }
        None => {
            ctx.session.cancel_delete();
            Err(RosterError::Api(format!(
                "Not deleted: type \"{}\" to confirm",
                CONFIRM_WORD
            )))
        }
    }
}

fn prompt_confirmation(ctx: &AppContext, selector: &RowSelector) -> Result<String> {
    let name = ctx.session.api().find(selector)?.record.name;
    print!(
        "Are you sure you want to delete {}? Type \"{}\" to confirm: ",
        name, CONFIRM_WORD
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn handle_locations(country: Option<&str>, state: Option<&str>) -> Result<()> {
    match (country, state) {
        (None, _) => print_options(locations::countries()),
        (Some(country), None) => {
            if !locations::countries().contains(&country) {
                return Err(RosterError::Api(format!("Unknown country: {}", country)));
            }
            print_options(locations::states_for(country));
        }
        (Some(country), Some(state)) => {
            if !locations::is_state_of(country, state) {
                return Err(RosterError::Api(format!(
                    "{} is not a state of {}",
                    state, country
                )));
            }
            print_options(locations::cities_for(state));
        }
    }
    Ok(())
}

fn handle_validate(field: &str, value: &str) -> Result<()> {
    let field: Field = field.parse().map_err(RosterError::Api)?;
    match validate_field(field, value) {
        None => {
            println!("{}: ok", field);
            Ok(())
        }
        Some(message) => {
            let mut errors = FieldErrors::default();
            errors.set(field, Some(message));
            Err(RosterError::Validation(errors))
        }
    }
}

fn handle_weather(ctx: &AppContext, town: &str) -> Result<()> {
    let Some(client) = &ctx.weather else {
        return Err(RosterError::Weather(
            "no API key configured (set weather.api_key or ROSTER_WEATHER_API_KEY)".into(),
        ));
    };
    match client.lookup(town.trim())? {
        Some(report) => print_weather(&report),
        None => println!("No match for {}", town),
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    if let Some(path) = &ctx.config_file {
        println!("# {}", path.display());
    }
    println!("# store: {}", ctx.data_dir.display());
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
