//! method-sql CLI - Translate method calls to T-SQL
//!
//! Usage:
//!   method-sql list
//!   method-sql translate <METHOD> [--instance NAME:TYPE] [--arg NAME:TYPE]... [--config PATH]
//!
//! Examples:
//!   method-sql translate "Convert.ToInt32(string)" --arg qty:string
//!   method-sql translate "Convert.ToDateTime(float64)" --arg y:float64
//!   method-sql translate "Date.AddDays(int32)" --instance order_date:date --arg n:int32
//!   method-sql translate "Date.ToDateTime(time)" --instance d:date --arg t:time --verbose

use clap::{Parser, Subcommand};
use method_sql::config::{Settings, SettingsError};
use method_sql::sql::{column, HostType, SqlExpr, SqlExpressionFactory};
use method_sql::translate::{
    catalog, registry, MethodCallTranslatorProvider, MethodInfo, MethodParseError,
    MethodSignature, Translation,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "method-sql")]
#[command(about = "method-sql - Translate method calls in query expressions to T-SQL")]
#[command(version)]
struct Cli {
    /// Path to a method-sql.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recognized method signature
    List,

    /// Translate one method call and print the resulting SQL
    Translate {
        /// Method descriptor, e.g. "Convert.ToInt32(string)"
        method: String,

        /// Receiver column as NAME:TYPE
        #[arg(short, long)]
        instance: Option<String>,

        /// Argument column as NAME:TYPE (repeatable, in order)
        #[arg(short, long = "arg")]
        args: Vec<String>,

        /// Also print the expression tree
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.logging.level.as_str()),
    )
    .init();

    // Surface table misconfiguration before doing any work
    registry::init();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Translate {
            method,
            instance,
            args,
            verbose,
        } => cmd_translate(&settings, &method, instance.as_deref(), &args, verbose),
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, SettingsError> {
    match path {
        Some(p) => Settings::from_file(p),
        None => Settings::load(),
    }
}

fn cmd_list() -> ExitCode {
    let mut conversions: Vec<_> = registry::conversion_methods().iter().collect();
    conversions.sort();

    println!("Value conversions:");
    for sig in conversions {
        println!("  - {}", sig);
    }
    println!();

    let mut date_parts: Vec<_> = registry::date_parts().iter().collect();
    date_parts.sort();

    println!("Date methods:");
    for (sig, part) in date_parts {
        println!("  - {} (DATEADD {})", sig, part);
    }
    println!("  - {} (DATETIME2FROMPARTS)", registry::to_date_time_method());
    println!("  - Date.FromDateTime(datetime) (conversion to date)");

    ExitCode::SUCCESS
}

fn cmd_translate(
    settings: &Settings,
    method: &str,
    instance: Option<&str>,
    args: &[String],
    verbose: bool,
) -> ExitCode {
    let method = match resolve_method(method) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let instance = match instance.map(parse_column).transpose() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let arguments = match args
        .iter()
        .map(|a| parse_column(a.as_str()))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let provider =
        match MethodCallTranslatorProvider::from_settings(settings, SqlExpressionFactory::default())
        {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                return ExitCode::FAILURE;
            }
        };

    match provider.translate(instance.as_ref(), method, &arguments) {
        Translation::Recognized(expr) => {
            if verbose {
                println!("-- Method: {}", method.signature);
                println!("-- Translators: {}", provider.translator_names().join(", "));
                println!("-- {:#?}", expr);
                println!();
            }
            println!("{}", expr.to_sql());
            ExitCode::SUCCESS
        }
        Translation::NotRecognized => {
            println!("not recognized");
            ExitCode::FAILURE
        }
    }
}

fn resolve_method(descriptor: &str) -> Result<&'static MethodInfo, MethodParseError> {
    let signature: MethodSignature = descriptor.parse()?;
    catalog::find(&signature).ok_or(MethodParseError::NotInCatalog(signature))
}

/// Parse `NAME:TYPE` into a column leaf.
fn parse_column(column_arg: &str) -> Result<SqlExpr, String> {
    let (name, ty) = column_arg
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:TYPE, got '{}'", column_arg))?;
    let host_type: HostType = ty.parse()?;
    Ok(column(name.trim(), host_type))
}
