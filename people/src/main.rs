//! People table command-line viewer.
//!
//! Loads people from `PEOPLE_FILE`, applies `PEOPLE_QUERY`, then replays one
//! header click per argument (`name`, `sex`, `born`, `died`), printing the
//! table and the resulting query after each step.

use anyhow::Context;
use people_table::{
    config::Config, person::load_people, LogNavigator, PeopleTableAction,
    PeopleTableEnvironment, PeopleTableReducer, PeopleTableState, SortKey,
};
use people_table_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type PeopleStore =
    Store<PeopleTableState, PeopleTableAction, PeopleTableEnvironment, PeopleTableReducer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    config.validate()?;
    info!(people_file = %config.people_file.display(), query = %config.query, "Configuration loaded");

    let clicks = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<SortKey>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid column argument")?;

    let people = load_people(&config.people_file).await?;

    let store = PeopleStore::new(
        PeopleTableState::default(),
        PeopleTableReducer::new(),
        PeopleTableEnvironment::new(Arc::new(LogNavigator)),
    );

    let setup = [
        PeopleTableAction::PeopleLoaded(people),
        PeopleTableAction::QueryChanged(config.query.clone()),
        PeopleTableAction::PersonSelected(config.selected.clone()),
    ];
    for action in setup {
        store.send(action).await?.wait().await;
    }
    print_table(&store).await?;

    for column in clicks {
        info!(column = %column, "Clicking header");
        store
            .send(PeopleTableAction::ColumnClicked(column))
            .await?
            .wait()
            .await;
        print_table(&store).await?;
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}

async fn print_table(store: &PeopleStore) -> anyhow::Result<()> {
    let (table, query) = store
        .state(|state| (state.table(), state.query.clone()))
        .await;
    let table = table?;

    println!("?{query}");
    if table.rows.is_empty() {
        println!("(no people)");
    } else {
        print!("{}", table.render_text());
    }
    println!();
    Ok(())
}
