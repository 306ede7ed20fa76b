use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;

use rusty_round::args::{self, CleanArgs, StoreKind};
use rusty_round::controller::{AppState, http_handlers};
use rusty_round::{CourseCatalog, MemoryRoundStore, RoundStore, SqliteRoundStore, logging};

#[actix_web::main]
async fn main() -> Result<()> {
    let args = args::args_checks()?;
    logging::init_logger(args.verbose, args.log_json).context("install logger")?;

    let catalog = Arc::new(load_catalog(&args)?);
    let store = open_store(&args)?;
    tracing::info!(
        courses = catalog.len(),
        store = %args.store,
        "listening on {}:{}",
        args.bind,
        args.port
    );

    let state = Data::new(AppState::new(catalog, store));
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http_handlers::configure)
            .service(Files::new("/static", "./static"))
    })
    .bind((args.bind.as_str(), args.port))
    .with_context(|| format!("bind {}:{}", args.bind, args.port))?
    .run()
    .await?;
    Ok(())
}

fn load_catalog(args: &CleanArgs) -> Result<CourseCatalog> {
    match &args.courses {
        Some(catalog) => Ok(catalog.clone()),
        None => CourseCatalog::builtin().context("load built-in courses"),
    }
}

fn open_store(args: &CleanArgs) -> Result<Arc<dyn RoundStore>> {
    let store: Arc<dyn RoundStore> = match args.store {
        StoreKind::Memory => Arc::new(MemoryRoundStore::new()),
        StoreKind::Sqlite if args.db_name == ":memory:" => {
            Arc::new(SqliteRoundStore::open_in_memory().context("open in-memory sqlite")?)
        }
        StoreKind::Sqlite => Arc::new(
            SqliteRoundStore::open(&args.db_name)
                .with_context(|| format!("open sqlite {}", args.db_name))?,
        ),
    };
    Ok(store)
}
