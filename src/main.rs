mod annotation;
mod cli;
mod input;
mod logging;
mod messages;
mod model;
mod pipeline;
mod report;
mod status;
mod survival;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::info;

use crate::cli::{AnnotateArgs, Cli, Commands, MessagesArgs, SurvivalArgs};
use crate::input::{load_annotation_input, load_messages, load_survival_cohorts};
use crate::messages::{MemoryStore, MessageAction, apply_action, shown_message};
use crate::model::profile::ChartProfile;
use crate::pipeline::annotation_report::write_annotation_reports;
use crate::pipeline::survival_report::write_survival_reports;

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Survival(args) => run_survival(&args),
        Commands::Annotate(args) => run_annotate(&args),
        Commands::Messages(args) => run_messages(&args),
    }
}

fn run_survival(args: &SurvivalArgs) -> Result<(), String> {
    let cohorts = load_survival_cohorts(&args.input).map_err(|e| e.to_string())?;
    let profile = ChartProfile::with_title(args.title.as_deref());
    let summary =
        write_survival_reports(&cohorts, &profile, &args.out).map_err(|e| e.to_string())?;
    info!(
        "logrank p-value {} ({} vs {} cases)",
        summary.log_rank_p_value_text,
        summary.altered.stats.total_cases,
        summary.unaltered.stats.total_cases
    );
    Ok(())
}

fn run_annotate(args: &AnnotateArgs) -> Result<(), String> {
    let input = load_annotation_input(&args.input).map_err(|e| e.to_string())?;
    write_annotation_reports(&input, &args.out).map_err(|e| e.to_string())?;
    Ok(())
}

fn run_messages(args: &MessagesArgs) -> Result<(), String> {
    let messages = load_messages(&args.input).map_err(|e| e.to_string())?;
    let now = args.now.unwrap_or_else(now_ms);

    let mut persistent = MemoryStore::new();
    let mut session = MemoryStore::new();
    let actions = args
        .dismissed
        .iter()
        .map(|id| (MessageAction::Dismiss, id))
        .chain(args.reminded.iter().map(|id| (MessageAction::Remind, id)));
    for (action, id) in actions {
        if let Some(message) = messages.iter().find(|m| &m.id == id) {
            apply_action(action, message, &mut persistent, &mut session);
        }
    }

    let shown = shown_message(&messages, now, &args.location, &persistent, &session)
        .map_err(|e| e.to_string())?;
    match shown {
        Some(message) => println!("{}\t{}", message.id, message.content),
        None => info!("no message to show for {}", args.location),
    }
    Ok(())
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(epoch_ms)
        .unwrap_or(0)
}

fn epoch_ms(elapsed: Duration) -> i64 {
    i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
