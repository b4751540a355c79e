use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use repo_search_lib::{fetch_avatar, RepositoryRecord, Transport};
use std::path::Path;

/// The result list. Each new result set replaces the previous one.
#[derive(Debug, Default)]
pub struct ListScreen {
    records: Vec<RepositoryRecord>,
}

impl ListScreen {
    pub fn replace(&mut self, records: Vec<RepositoryRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[RepositoryRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&RepositoryRecord> {
        self.records.get(index)
    }

    pub fn render(&self) -> String {
        if self.records.is_empty() {
            return String::from("no repositories found\n");
        }

        let mut lines = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                format!(
                    "{:>3}  {} [{}] {} stars",
                    index,
                    record.title().yellow(),
                    record.language(),
                    record.stars_count()
                )
            })
            .collect::<Vec<_>>();
        lines.push(format!("({} repos)", self.records.len()));
        lines.push(String::new());
        lines.join("\n")
    }
}

pub fn render_detail(record: &RepositoryRecord) -> String {
    format!(
        "{}\nWritten in {}\n{} stars\n{} watchers\n{} forks\n{} open issues\n",
        record.title().bold(),
        record.language(),
        record.stars_count(),
        record.watchers_count(),
        record.forks_count(),
        record.open_issues_count()
    )
}

/// Prints the detail of result `index`, then fetches its avatar and saves it
/// when `avatar_out` is set.
///
/// An index outside the list and a failed avatar download are not errors.
pub async fn show_detail(
    screen: &ListScreen,
    index: usize,
    transport: &dyn Transport,
    avatar_out: Option<&Path>,
) -> Result<()> {
    let Some(record) = screen.get(index) else {
        println!("no result {} ({} repos)", index, screen.records().len());
        return Ok(())
    };

    print!("{}", render_detail(record));

    let Some(bytes) = fetch_avatar(transport, record).await else {
        return Ok(())
    };

    match avatar_out {
        Some(path) => {
            tokio::fs::write(path, &bytes)
                .await
                .with_context(|| format!("could not write avatar to {}", path.display()))?;
            println!("avatar saved to {}", path.display());
        }
        None => debug!("fetched {} byte avatar for {}", bytes.len(), record.title()),
    }

    Ok(())
}
