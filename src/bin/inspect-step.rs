use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use step_inspector::{
    error::InspectError,
    parse::{self, Step},
    report, select,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "inspect-step",
    about = "Inspect one step of an application export: triggers, widgets and a flowchart of their logic"
)]
struct Cli {
    /// Application export JSON file
    #[arg(value_name = "APP_JSON")]
    app_json: PathBuf,
    /// Step to inspect; prompts with a numbered list when omitted
    #[arg(value_name = "STEP_ID")]
    step_id: Option<String>,
    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Print only the diagram section
    #[arg(long, conflicts_with = "report_only")]
    diagram_only: bool,
    /// Print only the text report
    #[arg(long)]
    report_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let json = fs::read_to_string(&cli.app_json)
        .with_context(|| format!("failed to read {}", cli.app_json.display()))?;
    let doc = parse::parse(&json).map_err(combine)?;
    println!("Loaded {} step(s).", doc.steps.len());

    let step = match cli.step_id.as_deref() {
        Some(id) => select::find_step(&doc.steps, id.trim())?,
        None => match prompt_for_step(&doc.steps)? {
            Some(step) => step,
            None => {
                println!("No selection made; exiting.");
                return Ok(ExitCode::SUCCESS);
            }
        },
    };

    let inspection = step_inspector::inspect(&doc, step).map_err(combine)?;
    if !cli.diagram_only {
        print!("{}", inspection.report);
    }
    if !cli.report_only {
        if !cli.diagram_only {
            println!();
        }
        print!("{}", report::diagram_section(inspection.diagram.as_ref()));
    }
    Ok(ExitCode::SUCCESS)
}

fn prompt_for_step(steps: &[Step]) -> Result<Option<&Step>> {
    let sorted = select::sorted_steps(steps);

    println!("\nAvailable steps:\n");
    for (i, step) in sorted.iter().enumerate() {
        println!("{}", select::listing_line(i + 1, step));
    }
    print!("\nEnter step number to inspect (or press Enter to quit): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read step selection")?;

    let chosen = select::choose_by_number(&sorted, &answer)?;
    if let Some(step) = chosen {
        let number = sorted
            .iter()
            .position(|s| std::ptr::eq(*s, step))
            .map_or(0, |i| i + 1);
        println!(
            "\nSelected step #{}: {} [id={}]",
            number,
            step.name.as_deref().unwrap_or(parse::UNNAMED),
            step.id
        );
    }
    Ok(chosen)
}

fn combine(errors: Vec<InspectError>) -> anyhow::Error {
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!(lines.join("\n"))
}
