mod args;
mod screen;
mod session;

use crate::args::Args;
use crate::screen::{show_detail, ListScreen};
use anyhow::{anyhow, Result};
use clap::Parser;
use repo_search_lib::{
    ChannelListener, DeliveryPolicy, HttpTransport, SearchCoordinator, SearchEvent,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    args.validate().unwrap_or_else(|e| e.exit());

    // A stale interactive search must never overwrite a newer list.
    let delivery_policy = match args.query {
        Some(_) => DeliveryPolicy::All,
        None => DeliveryPolicy::LatestOnly,
    };

    let (listener, events) = ChannelListener::new();
    let coordinator = SearchCoordinator::builder(Arc::new(HttpTransport::new()?))
        .api_url(&args.api_url)
        .listener(Arc::new(listener))
        .delivery_policy(delivery_policy)
        .build();

    match args.query.as_deref() {
        Some(query) => run_once(&coordinator, events, query, &args).await,
        None => session::run(&coordinator, events, args.avatar_out.as_deref()).await,
    }
}

async fn run_once(
    coordinator: &SearchCoordinator,
    mut events: UnboundedReceiver<SearchEvent>,
    query: &str,
    args: &Args,
) -> Result<()> {
    coordinator.search(query).await?;

    let records = match events.recv().await {
        Some(SearchEvent::Results(records)) => records,
        Some(SearchEvent::Error(e)) => {
            return Err(anyhow!(e).context(format!("search for {:?} failed", query)))
        }
        None => return Err(anyhow!("search for {:?} produced no outcome", query)),
    };

    let mut screen = ListScreen::default();
    screen.replace(records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(screen.records())?);
    } else {
        print!("{}", screen.render());
    }

    if let Some(index) = args.detail {
        show_detail(
            &screen,
            index,
            coordinator.transport().as_ref(),
            args.avatar_out.as_deref(),
        )
        .await?;
    }

    Ok(())
}
