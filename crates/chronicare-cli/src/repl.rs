//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! A REPL session plays the role of the assessment form: each `assess`
//! records a tier in the session's results, and `plan` composes the
//! unified care plan from whatever has been assessed so far.

use crate::config::{Config, RangePolicy};
use crate::error::{CliError, Result};
use crate::intake::{assess_into, parse_assignments};
use crate::output::Formatter;
use chronicare_domain::{compose, Condition, ResultsMapping};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::{debug, info};

/// Run the interactive REPL.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Chronicare REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    // Initialize readline editor
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;
    editor
        .set_max_history_size(config.settings.history_size)
        .ok();

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let policy = config.settings.range_policy;
    let mut results = ResultsMapping::new();
    info!("Started assessment session");

    loop {
        let prompt = format!("chronicare [{}/{}]> ", results.len(), Condition::ALL.len());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => match execute_repl_command(cmd, &mut results, policy, formatter) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    info!(assessed = results.len(), "Ended assessment session");

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Assess {
        condition: Condition,
        assignments: Vec<String>,
    },
    Results,
    Plan,
    Reset,
    Fields(Option<Condition>),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "assess" => parse_assess_command(&parts[1..]),
        "results" => Ok(ReplCommand::Results),
        "plan" => Ok(ReplCommand::Plan),
        "reset" => Ok(ReplCommand::Reset),
        "fields" => match parts.get(1) {
            Some(name) => Ok(ReplCommand::Fields(Some(parse_condition(name)?))),
            None => Ok(ReplCommand::Fields(None)),
        },
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

fn parse_assess_command(args: &[&str]) -> Result<ReplCommand> {
    let Some(name) = args.first() else {
        return Err(CliError::InvalidInput(
            "Usage: assess <condition> [field=value ...]".to_string(),
        ));
    };

    Ok(ReplCommand::Assess {
        condition: parse_condition(name)?,
        assignments: args[1..].iter().map(|s| s.to_string()).collect(),
    })
}

fn parse_condition(name: &str) -> Result<Condition> {
    name.parse().map_err(CliError::InvalidInput)
}

/// Execute a REPL command against the session results.
fn execute_repl_command(
    cmd: ReplCommand,
    results: &mut ResultsMapping,
    policy: RangePolicy,
    formatter: &Formatter,
) -> Result<String> {
    match cmd {
        ReplCommand::Assess {
            condition,
            assignments,
        } => {
            let assignments: Vec<&str> = assignments.iter().map(String::as_str).collect();
            let measurements = parse_assignments(condition, &assignments)?;
            let (condition, tier) = assess_into(results, measurements, policy)?;
            formatter.format_assessment(condition, tier)
        }
        ReplCommand::Results => formatter.format_results(results),
        ReplCommand::Plan => {
            let plan = compose(results);
            debug!(conditions = results.len(), "Composed care plan");
            formatter.format_plan(results, &plan)
        }
        ReplCommand::Reset => {
            results.clear();
            info!("Cleared session results");
            Ok(formatter.success("Session results cleared"))
        }
        ReplCommand::Fields(condition) => {
            let conditions = match condition {
                Some(condition) => vec![condition],
                None => Condition::ALL.to_vec(),
            };
            formatter.format_fields(&conditions)
        }
        ReplCommand::Exit | ReplCommand::Help => unreachable!(),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  assess <condition> [field=value ...] - Assess one condition");
    println!("    condition: cardiovascular|diabetes|copd|asthma");
    println!("    unspecified fields use their defaults (see 'fields')");
    println!("  results                              - Show tiers assessed this session");
    println!("  plan                                 - Generate the unified care plan");
    println!("  reset                                - Clear this session's results");
    println!("  fields [condition]                   - List input fields, ranges, defaults");
    println!("  help, ?                              - Show this help");
    println!("  exit, quit, q                        - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use chronicare_domain::{recommendation, RiskTier};

    fn run(line: &str, results: &mut ResultsMapping, formatter: &Formatter) -> Result<String> {
        let cmd = parse_repl_command(line)?;
        execute_repl_command(cmd, results, RangePolicy::Clamp, formatter)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_repl_command("quit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("plan").unwrap(), ReplCommand::Plan);
        assert_eq!(
            parse_repl_command("fields copd").unwrap(),
            ReplCommand::Fields(Some(Condition::Copd))
        );
        assert_eq!(
            parse_repl_command("assess cardio smoker=true systolic_bp=150").unwrap(),
            ReplCommand::Assess {
                condition: Condition::Cardiovascular,
                assignments: vec!["smoker=true".to_string(), "systolic_bp=150".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_repl_command("assess").is_err());
        assert!(parse_repl_command("assess gout").is_err());
        assert!(parse_repl_command("diagnose").is_err());
    }

    #[test]
    fn test_session_flow() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut results = ResultsMapping::new();

        let tier = run("assess asthma frequency_of_symptoms=1", &mut results, &formatter).unwrap();
        assert_eq!(tier, "Moderate");
        let tier = run("assess cardio smoker=yes systolic_bp=150", &mut results, &formatter).unwrap();
        assert_eq!(tier, "High");

        let plan = run("plan", &mut results, &formatter).unwrap();
        assert_eq!(
            plan,
            format!(
                "{}\n\n{}",
                recommendation(Condition::Cardiovascular, RiskTier::High),
                recommendation(Condition::Asthma, RiskTier::Moderate)
            )
        );

        let listing = run("results", &mut results, &formatter).unwrap();
        assert_eq!(listing, "Cardiovascular=High\nAsthma=Moderate");

        run("reset", &mut results, &formatter).unwrap();
        assert!(results.is_empty());
        assert_eq!(run("plan", &mut results, &formatter).unwrap(), "");
    }

    #[test]
    fn test_failed_assessment_leaves_results_untouched() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut results = ResultsMapping::new();
        assert!(run("assess copd fev1=lots", &mut results, &formatter).is_err());
        assert!(results.is_empty());
    }
}
