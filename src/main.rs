use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::{Parser, Subcommand};
use log::info;

use script_frontend::{
    errors::errors::{Error, ErrorTip},
    evaluator::{environment::Environment, evaluator::eval, object::Object},
    get_line_at_position,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::{parse, Parser as ScriptParser},
};

#[derive(Parser)]
#[command(name = "script_frontend")]
#[command(about = "Lexer, parser and expression evaluator for a small typed scripting language", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a source file and print its canonical form
    Parse {
        /// Source file
        input: PathBuf,

        /// Print the syntax tree instead of the canonical form
        #[arg(long)]
        show_ast: bool,
    },

    /// Print the tokens of a source file
    Tokens {
        /// Source file
        input: PathBuf,
    },

    /// Evaluate a single expression
    Eval {
        /// The expression, e.g. "typeof(x * 2)"
        expression: String,

        /// Bind a variable, e.g. --var x=10
        #[arg(long = "var", value_parser = parse_binding)]
        vars: Vec<(String, String)>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, show_ast } => {
            let source = read_to_string(&input)?;
            let file_name = file_name(&input);

            let start = Instant::now();
            let (parser, program) = parse(source.clone(), Some(file_name.clone()));
            info!("Parsed {} in {:?}", file_name, start.elapsed());

            if !parser.errors().is_empty() {
                for error in parser.errors() {
                    display_error(error, &source, &file_name);
                }
                process::exit(1);
            }

            if show_ast {
                println!("{:#?}", program);
            } else {
                print!("{}", program);
            }
        }
        Commands::Tokens { input } => {
            let source = read_to_string(&input)?;

            let start = Instant::now();
            let tokens = tokenize(source, Some(file_name(&input)));
            info!("Tokenized in {:?}", start.elapsed());

            for token in tokens {
                println!("{}", token);
            }
        }
        Commands::Eval { expression, vars } => {
            let mut parser = ScriptParser::new(Lexer::new(expression.clone(), None));

            let expr = match parser.parse_standalone_expression() {
                Some(expr) => expr,
                None => {
                    for error in parser.errors() {
                        display_error(error, &expression, "shell");
                    }
                    process::exit(1);
                }
            };

            let mut env = Environment::new();
            for (name, value) in &vars {
                env.set(name, Object::from_input(value));
            }
            info!("Evaluating {} with {} bindings", expr, vars.len());

            match eval(&expr, &env) {
                Ok(result) => println!("{}", result),
                Err(error) => {
                    display_error(&error, &expression, "shell");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn parse_binding(binding: &str) -> Result<(String, String), String> {
    match binding.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got `{}`", binding)),
    }
}

fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: UnexpectedPeek: expected next token to be ), got { instead
        -> main.mg:2:7
           |
         2 | if (y { b; }
           | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    println!("Error: {}: {}", error.get_error_name(), error);
    println!("-> {}:{}:{}", file, line, line_pos + 1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        println!("{:>padding$} {}", "=", tip);
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
