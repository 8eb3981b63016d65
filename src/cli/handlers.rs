use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::cli::commands::{Cli, Commands, DateArgs, InitArgs, RunArgs};
use crate::cli::output::{RunSummaryJson, forest_to_json, format_forest};
use crate::io::{config_io, note_io};
use crate::model::config::Config;
use crate::ops::roll_forward;
use crate::parse::{TodoPattern, parse_text_for_todos};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let notes_dir = match cli.notes_dir {
        Some(dir) => std::fs::canonicalize(&dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init(args) => cmd_init(&notes_dir, args),
        Commands::Run(args) => cmd_run(&notes_dir, args, json),
        Commands::Preview(args) => cmd_preview(&notes_dir, args, json),
        Commands::List(args) => cmd_list(&notes_dir, args, json),
    }
}

fn resolve_date(arg: &Option<String>, config: &Config) -> Result<NaiveDate, String> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, &config.note_format)
            .map_err(|e| format!("cannot parse date '{}' with format '{}': {}", s, config.note_format, e)),
        None => Ok(Local::now().date_naive()),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_init(notes_dir: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = notes_dir.join(config_io::CONFIG_FILE);
    if config_path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )
        .into());
    }
    config_io::write_config(notes_dir, &Config::default())?;
    println!("wrote {}", config_path.display());
    Ok(())
}

fn cmd_run(notes_dir: &Path, args: RunArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(notes_dir)?;
    let today = resolve_date(&args.date, &config)?;

    let previous = note_io::collect_daily_notes(notes_dir, today, &config)?;
    log::info!(
        "checking {} prior notes: {}",
        previous.len(),
        previous
            .iter()
            .map(|n| n.date.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let today_path = note_io::daily_note_path(notes_dir, today, &config);
    let today_text = match note_io::read_note(&today_path)? {
        Some(text) => text,
        None => {
            log::info!("today's note not found, starting from an empty note");
            String::new()
        }
    };

    let previous_texts: Vec<String> = previous.iter().map(|n| n.text.clone()).collect();
    let outcome = roll_forward(&previous_texts, &today_text, &config)?;

    let mut previous_rewritten = 0;
    if args.dry_run {
        print!("{}", outcome.today_text);
    } else {
        note_io::write_note(&today_path, &outcome.today_text)?;
        for (note, update) in previous.iter().zip(&outcome.updated_previous) {
            if let Some(text) = update {
                note_io::write_note(&note.path, text)?;
                previous_rewritten += 1;
            }
        }
    }

    let summary = RunSummaryJson {
        date: today.format(&config.note_format).to_string(),
        notes_examined: previous.len(),
        incomplete_found: outcome.incomplete_found,
        carried: outcome.carried,
        previous_rewritten,
        dry_run: args.dry_run,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !args.dry_run {
        println!(
            "{}: examined {} notes, {} still incomplete, carried {} into today's note{}",
            summary.date,
            summary.notes_examined,
            summary.incomplete_found,
            summary.carried,
            if previous_rewritten > 0 {
                format!(", rewrote {} prior notes", previous_rewritten)
            } else {
                String::new()
            }
        );
    }
    Ok(())
}

fn cmd_preview(
    notes_dir: &Path,
    args: DateArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(notes_dir)?;
    let today = resolve_date(&args.date, &config)?;

    let previous = note_io::collect_daily_notes(notes_dir, today, &config)?;
    let today_path = note_io::daily_note_path(notes_dir, today, &config);
    let today_text = note_io::read_note(&today_path)?.unwrap_or_default();

    let previous_texts: Vec<String> = previous.iter().map(|n| n.text.clone()).collect();
    let outcome = roll_forward(&previous_texts, &today_text, &config)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&forest_to_json(&outcome.carried_todos))?
        );
    } else if outcome.carried == 0 {
        println!("nothing to carry");
    } else {
        println!("{}", format_forest(&outcome.carried_todos));
    }
    Ok(())
}

fn cmd_list(notes_dir: &Path, args: DateArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(notes_dir)?;
    let date = resolve_date(&args.date, &config)?;

    let path = note_io::daily_note_path(notes_dir, date, &config);
    let Some(text) = note_io::read_note(&path)? else {
        return Err(format!("no note at {}", path.display()).into());
    };

    let pattern = TodoPattern::from_config(&config)?;
    let forest = parse_text_for_todos(&text, config.group_by_section, &pattern);

    if json {
        println!("{}", serde_json::to_string_pretty(&forest_to_json(&forest))?);
    } else if forest.is_empty() {
        println!("no todos in {}", path.display());
    } else {
        println!("{}", format_forest(&forest));
    }
    Ok(())
}
