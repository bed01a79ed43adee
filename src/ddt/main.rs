use chrono::{Local, LocalResult, TimeZone};
use clap::Parser;
use colored::*;
use ddt::api::DdtApi;
use ddt::commands::{create, update, CmdMessage, MessageLevel};
use ddt::config::Credentials;
use ddt::error::Result;
use ddt::model::Downtime;
use ddt::remote::http::DatadogClient;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    precheck(&cli.command)?;

    let credentials = Credentials::from_env()?;
    let client = DatadogClient::new(credentials)?;
    let mut api = DdtApi::new(client);
    api.validate()?;

    let result = match cli.command {
        Commands::Get { id } => api.get_downtime(id, cli.debug)?,
        Commands::List => api.list_downtimes(cli.debug)?,
        Commands::Create {
            scope,
            time,
            message,
        } => api.create_downtime(&scope, &time, message.as_deref(), cli.debug)?,
        Commands::Update {
            id,
            scope,
            time,
            message,
        } => api.update_downtime(
            id,
            scope.as_deref(),
            time.as_deref(),
            message.as_deref(),
            cli.debug,
        )?,
        Commands::Delete { id } => api.delete_downtime(id)?,
    };

    print_messages(&result.messages);
    if let Some(downtime) = &result.downtime {
        print_downtime(downtime);
    }
    print_downtime_list(&result.downtimes);
    Ok(())
}

/// Reject malformed local input before credentials are loaded or any
/// network call is made.
fn precheck(command: &Commands) -> Result<()> {
    match command {
        Commands::Create {
            scope,
            time,
            message,
        } => create::build_patch(scope, time, message.as_deref()).map(|_| ()),
        Commands::Update {
            scope,
            time,
            message,
            ..
        } => update::build_patch(scope.as_deref(), time.as_deref(), message.as_deref()).map(|_| ()),
        _ => Ok(()),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn print_downtime(downtime: &Downtime) {
    println!("Id: {}", downtime.id.to_string().yellow());
    println!("Active: {}", downtime.active);
    println!("Message: {}", downtime.message.as_deref().unwrap_or(""));
    println!("Scope: {}", downtime.scope.join(","));
    println!("Start: {}", format_timestamp(downtime.start));
    println!("End: {}", format_timestamp(downtime.end));
    println!("Has End: {}", downtime.has_end());
}

fn print_downtime_list(downtimes: &[Downtime]) {
    for downtime in downtimes {
        println!(
            "{}  active={}  scope={}  {}",
            downtime.id.to_string().yellow(),
            downtime.active,
            downtime.scope.join(","),
            downtime.message.as_deref().unwrap_or("").dimmed()
        );
    }
}

/// Epoch seconds rendered as local calendar time.
fn format_timestamp(ts: Option<i64>) -> String {
    match ts {
        Some(secs) => match Local.timestamp_opt(secs, 0) {
            LocalResult::Single(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            _ => secs.to_string(),
        },
        None => "-".to_string(),
    }
}
