use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::{debug, info, Level};

use codebox::highlighting::{self, canonical_name, classify, Highlighters, Language};
use codebox::language::{LoadingError, OutputMode, RenderingError};
use codebox::parsing;
use codebox::rendering::{colourize, Processor};
use codebox::templating::CodeTemplate;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("codebox")
        .version(VERSION)
        .propagate_version(true)
        .about("Highlight and anchor code listings in HTML fragments.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log processing decisions to standard error."),
        )
        .subcommand(
            Command::new("render")
                .about("Process the code listings in the given HTML fragment")
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_parser(["full-html", "simplified-html", "plain-text"])
                        .default_value("full-html")
                        .help("Which form listings take in the output."),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .value_name("FILE")
                        .help("Replacement for the built-in codeMetaCode template."),
                )
                .arg(
                    Arg::new("disable")
                        .long("disable")
                        .value_name("LANGUAGE")
                        .action(ArgAction::Append)
                        .help("Render listings in this language as plain text. May be repeated."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the HTML fragment, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Syntax highlight a source file on the terminal")
                .arg(
                    Arg::new("language")
                        .short('l')
                        .long("language")
                        .help("Highlighter to use. Guessed from the content if not given."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the source code, or '-' for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("render", submatches)) => render(submatches),
        Some(("highlight", submatches)) => highlight(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: codebox [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn read_input(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        std::io::read_to_string(std::io::stdin()).map_err(|error| LoadingError {
            problem: "Failed reading".to_string(),
            details: error
                .kind()
                .to_string(),
            filename,
        })
    } else {
        parsing::load(filename)
    }
}

fn exit_loading(error: &LoadingError) -> ! {
    eprintln!("{}", problem::concise_loading_error(error));
    std::process::exit(1);
}

fn render(submatches: &ArgMatches) {
    let filename = submatches
        .get_one::<String>("filename")
        .map(Path::new)
        .unwrap_or(Path::new("-"));

    let mode = submatches
        .get_one::<String>("mode")
        .and_then(|mode| {
            mode.parse::<OutputMode>()
                .ok()
        })
        .unwrap_or_default();
    debug!(?mode);

    let content = read_input(filename).unwrap_or_else(|error| exit_loading(&error));

    let mut highlighters = Highlighters::default();
    if let Some(names) = submatches.get_many::<String>("disable") {
        for name in names {
            match Language::from_canonical(&canonical_name(name)) {
                Some(language) => highlighters = highlighters.without(language),
                None => eprintln!(
                    "{}: no highlighter named {}",
                    "warning".bright_yellow(),
                    name
                ),
            }
        }
    }

    let text;
    let template = match submatches.get_one::<String>("template") {
        Some(path) => {
            let path = Path::new(path);
            text = parsing::load(path).unwrap_or_else(|error| exit_loading(&error));
            CodeTemplate::with_text(&text)
        }
        None => CodeTemplate::new(),
    };

    let result = template
        .and_then(|template| {
            Processor::new(mode).map(|processor| {
                processor
                    .with_template(template)
                    .with_highlighters(highlighters)
            })
        })
        .and_then(|mut processor| processor.process(&content));

    match result {
        Ok(output) => {
            info!("Rendered {} in {} mode", filename.display(), mode.mime_type());
            print!("{}", output);
        }
        Err(error) => {
            eprintln!("{}", problem::concise_rendering_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn highlight(submatches: &ArgMatches) {
    let filename = submatches
        .get_one::<String>("filename")
        .map(Path::new)
        .unwrap_or(Path::new("-"));

    let content = read_input(filename).unwrap_or_else(|error| exit_loading(&error));
    let source = highlighting::strip_blank_edges(&content);

    let declared = submatches
        .get_one::<String>("language")
        .map(String::as_str);
    let language = classify(declared, source);
    info!("Highlighting {} as {}", filename.display(), language.title());

    let raw_output = submatches.get_flag("raw-control-chars");
    if raw_output || std::io::stdout().is_terminal() {
        match colourize(language, source) {
            Ok(result) => println!("{}", result),
            Err(error) => {
                let error = RenderingError::from(error);
                eprintln!("{}", problem::concise_rendering_error(&error, filename));
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", source);
    }
}
