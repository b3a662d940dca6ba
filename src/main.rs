use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::error;
use reciformat::readers::read_document;
use reciformat::{load_config, parse_recipe_with_config, render_recipe, ReciformatError, Settings};

const USAGE: &str = "Usage: reciformat <location> [-o|--output <dir>]

Extracts recipe information from a document (file path or URL) and
reformats it as a Markdown file.";

struct Args {
    location: String,
    output: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut location = None;
    let mut output = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = Some(args.next().ok_or("Missing directory after --output")?);
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if location.is_none() => location = Some(arg),
            _ => return Err(format!("Unexpected argument: {arg}")),
        }
    }

    let location = location.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { location, output })
}

/// File name for a recipe title, without path separators
fn file_name(title: &str) -> String {
    let name: String = title
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '\0') { '-' } else { c })
        .collect();
    if name.is_empty() {
        "recipe".to_string()
    } else {
        name
    }
}

async fn run(args: Args, settings: Settings) -> Result<PathBuf, ReciformatError> {
    let document = read_document(&args.location, &settings).await?;
    let recipe = parse_recipe_with_config(&document, &settings)?;
    let markdown = render_recipe(&recipe);

    let dir = args.output.unwrap_or_else(|| settings.output_dir.clone());
    tokio::fs::create_dir_all(&dir).await?;
    let path = Path::new(&dir).join(format!("{}.md", file_name(&recipe.title)));
    tokio::fs::write(&path, markdown).await?;
    Ok(path)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(args, settings).await {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(ReciformatError::NoRecipeFound) => {
            eprintln!("No recipe found in document");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
