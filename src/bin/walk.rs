// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `walk` - CLI for recording and reviewing walks.

use clap::Parser;
use walk_tracker::cli::{Cli, Command};
use walk_tracker::config::Config;
use walk_tracker::models::{NewWalk, WalkRecord, WeatherReport};
use walk_tracker::store::{open_backend, WalkBackend, WalkStore, WeatherSource};
use walk_tracker::time_utils::format_utc_rfc3339;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(cli.log_filter())
        .init();

    let mut config = Config::from_env()?;
    if let Some(backend) = cli.backend {
        config.backend = backend.into();
    }

    let backend = open_backend(&config)?;
    run(backend.as_ref(), cli.command, cli.json).await
}

async fn run(
    backend: &dyn WalkBackend,
    command: Command,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Save {
            duration,
            distance,
            steps,
        } => {
            let walk = NewWalk::new(duration, distance, steps);
            let record = backend.save_walk(walk).await?;
            print_walks(std::slice::from_ref(&record), json)?;
        }
        Command::List => {
            let walks = backend.get_walks().await?;
            print_walks(&walks, json)?;
        }
        Command::Recent => match backend.get_recent_walk().await? {
            Some(record) => print_walks(std::slice::from_ref(&record), json)?,
            None if json => println!("null"),
            None => println!("No walks recorded yet."),
        },
        Command::Delete { id } => {
            let ack = backend.delete_walk(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&ack)?);
            } else {
                println!("Deleted walk {}", ack.id);
            }
        }
        Command::Weather => {
            let report = backend.get_weather().await?;
            print_weather(report.as_ref(), json)?;
        }
    }
    Ok(())
}

fn print_walks(walks: &[WalkRecord], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(walks)?);
        return Ok(());
    }
    if walks.is_empty() {
        println!("No walks recorded yet.");
        return Ok(());
    }

    println!(
        "{:<15} {:<25} {:>9} {:>9} {:>8}",
        "ID", "DATE", "DURATION", "KM", "STEPS"
    );
    for walk in walks {
        println!(
            "{:<15} {:<25} {:>9} {:>9.2} {:>8}",
            walk.id,
            format_utc_rfc3339(walk.date),
            format_duration(walk.duration),
            walk.distance,
            walk.steps
        );
    }
    Ok(())
}

fn print_weather(
    report: Option<&WeatherReport>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match (report, json) {
        (report, true) => println!("{}", serde_json::to_string_pretty(&report)?),
        (Some(r), false) => println!("{} {:.1}°C {}", r.icon, r.temp, r.condition),
        (None, false) => println!("Weather is not available from this backend."),
    }
    Ok(())
}

/// `h:mm:ss` for durations of an hour or more, `m:ss` otherwise.
fn format_duration(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}{}:{:02}:{:02}", sign, h, m, s)
    } else {
        format!("{}{}:{:02}", sign, m, s)
    }
}
