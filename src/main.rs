use std::io::{self, Read};

use rulebox::RuleBox;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let rulebox = match RuleBox::from_path(&config.rules_path) {
        Ok(rulebox) => rulebox,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    match config.mode {
        Mode::Single(input) => {
            for label in rulebox.assign_labels(&input) {
                println!("{label}");
            }
        }
        Mode::Batch(batch_path) => {
            let text = match std::fs::read_to_string(&batch_path) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("error: failed to read batch file {}: {err}", batch_path);
                    std::process::exit(1);
                }
            };
            let inputs: Vec<&str> = text.lines().collect();
            let results = rulebox.assign_labels_vector(&inputs);
            for labels in results {
                println!("{}", labels.join(","));
            }
        }
    }
}

enum Mode {
    Single(String),
    Batch(String),
}

struct CliConfig {
    rules_path: String,
    mode: Mode,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut rules_path: Option<String> = None;
    let mut input: Option<String> = None;
    let mut batch: Option<String> = None;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("rulebox {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--rules" => {
                let value = args.next().ok_or_else(|| "error: --rules expects a value".to_string())?;
                if rules_path.is_some() {
                    return Err("error: --rules provided multiple times".to_string());
                }
                rules_path = Some(value);
            }
            "--batch" => {
                let value = args.next().ok_or_else(|| "error: --batch expects a value".to_string())?;
                if batch.is_some() {
                    return Err("error: --batch provided multiple times".to_string());
                }
                batch = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--rules=") => {
                let value = arg.trim_start_matches("--rules=").to_string();
                if rules_path.is_some() {
                    return Err("error: --rules provided multiple times".to_string());
                }
                rules_path = Some(value);
            }
            _ if arg.starts_with("--batch=") => {
                let value = arg.trim_start_matches("--batch=").to_string();
                if batch.is_some() {
                    return Err("error: --batch provided multiple times".to_string());
                }
                batch = Some(value);
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=").to_string();
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let rules_path = rules_path.ok_or_else(|| format!("error: --rules is required\n\n{}", help_text()))?;

    match (input, batch) {
        (Some(_), Some(_)) => Err("error: --input and --batch are mutually exclusive".to_string()),
        (Some(input), None) => Ok(CliConfig { rules_path, mode: Mode::Single(input) }),
        (None, Some(batch)) => Ok(CliConfig { rules_path, mode: Mode::Batch(batch) }),
        (None, None) => {
            let input = read_stdin_input()?;
            if input.trim().is_empty() {
                return Err(format!("error: no input provided\n\n{}", help_text()));
            }
            Ok(CliConfig { rules_path, mode: Mode::Single(input) })
        }
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "rulebox {version}

Rule-driven text classifier.

Usage:
  rulebox --rules <path.json> [--input <text>] [--] [text...]
  rulebox --rules <path.json> --batch <path-to-newline-delimited-file>

Options:
  --rules <path>             Path to the JSON rule catalog. Required.
  -i, --input <text>         Single input string to label. If omitted and
                             --batch is not given, reads remaining args or
                             stdin when no args are provided. Prints one
                             matched label per line.
  --batch <path>             File of newline-delimited inputs. Prints one
                             comma-joined line of labels per input, in order.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error (e.g. I/O failure reading a --batch file).
  2  Invalid arguments or rule catalog construction failure.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
