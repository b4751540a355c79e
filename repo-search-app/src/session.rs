use crate::screen::{show_detail, ListScreen};
use anyhow::Result;
use log::debug;
use repo_search_lib::{SearchCoordinator, SearchEvent};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Search(String),
    Detail(usize),
    Quit,
    Empty,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Self::Search(String::from(line))
        };

        if command == "q" {
            return Self::Quit;
        }

        match command.parse::<usize>() {
            Ok(index) => Self::Detail(index),
            Err(_) => Self::Unknown(String::from(line)),
        }
    }
}

/// Interactive loop: queries from stdin, outcomes from `events`.
///
/// Only this task reads `events`, so the list screen has a single writer.
pub async fn run(
    coordinator: &SearchCoordinator,
    mut events: UnboundedReceiver<SearchEvent>,
    avatar_out: Option<&Path>,
) -> Result<()> {
    let mut screen = ListScreen::default();
    let mut pending = Vec::<JoinHandle<()>>::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break
                };
                match Input::parse(&line) {
                    Input::Search(query) => {
                        pending.retain(|handle| !handle.is_finished());
                        pending.push(coordinator.search(&query));
                    }
                    Input::Detail(index) => {
                        if let Err(e) =
                            show_detail(&screen, index, coordinator.transport().as_ref(), avatar_out).await
                        {
                            eprintln!("{:#}", e);
                        }
                    }
                    Input::Quit => return Ok(()),
                    Input::Empty => {}
                    Input::Unknown(line) => eprintln!("unknown command {:?}", line),
                }
            }
            Some(event) = events.recv() => handle_event(&mut screen, event),
        }
    }

    debug!("end of input, waiting for {} searches", pending.len());
    for handle in pending {
        handle.await?;
    }
    while let Ok(event) = events.try_recv() {
        handle_event(&mut screen, event);
    }

    Ok(())
}

fn handle_event(screen: &mut ListScreen, event: SearchEvent) {
    match event {
        SearchEvent::Results(records) => {
            screen.replace(records);
            print!("{}", screen.render());
        }
        SearchEvent::Error(e) => eprintln!("search failed: {}", e),
    }
}
