use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use ireal::{Config, IrealError, OutputFormat};
use tracing::Level;

const USAGE: &str = "Usage: ireal [--yaml] [--styles <styles.yaml>] [-v] [input]";

struct Options {
    format: OutputFormat,
    styles: Option<String>,
    verbose: bool,
    input: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        format: OutputFormat::Json,
        styles: None,
        verbose: false,
        input: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--yaml" => options.format = OutputFormat::Yaml,
            "--json" => options.format = OutputFormat::Json,
            "-v" | "--verbose" => options.verbose = true,
            "--styles" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--styles needs a file argument".to_string())?;
                options.styles = Some(path.clone());
            }
            "-h" | "--help" => return Err(String::new()),
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("Unknown option '{}'", flag));
            }
            path => {
                if options.input.is_some() {
                    return Err("Only one input may be given".to_string());
                }
                options.input = Some(path.to_string());
            }
        }
    }

    Ok(options)
}

fn read_source(input: Option<&str>) -> Result<String, IrealError> {
    match input {
        Some(path) if path != "-" => fs::read_to_string(path).map_err(|source| IrealError::Io {
            path: path.to_string(),
            source,
        }),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| IrealError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(source)
        }
    }
}

fn load_config(styles: Option<&str>) -> Result<Config, IrealError> {
    match styles {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| IrealError::Io {
                path: path.to_string(),
                source,
            })?;
            Config::from_yaml(&content)
        }
        None => Ok(Config::default()),
    }
}

fn run(options: &Options) -> Result<String, IrealError> {
    let config = load_config(options.styles.as_deref())?;
    let source = read_source(options.input.as_deref())?;
    ireal::convert(source.trim(), &config, options.format)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{}", message);
            }
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&options) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
