use dep_tree_diff::adapters::outbound::console::StderrProgressReporter;
use dep_tree_diff::adapters::outbound::filesystem::FileSystemReader;
use dep_tree_diff::adapters::outbound::parsers::MavenTreeParser;
use dep_tree_diff::application::dispatch::ReportingDispatcher;
use dep_tree_diff::application::dto::DiffRequest;
use dep_tree_diff::application::factories::{ConsoleTarget, ReporterFactory};
use dep_tree_diff::application::use_cases::DiffDependencyTreesUseCase;
use dep_tree_diff::cli::Args;
use dep_tree_diff::config::{self, ConfigFile};
use dep_tree_diff::shared::error::ExitCode;
use dep_tree_diff::shared::security::validate_input_file;
use dep_tree_diff::shared::Result;
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let options = config::merge_options(
        config.as_ref(),
        &args.exclude,
        args.reporter_spec(),
        args.fail_on_changes,
    )?;

    // Fail fast on unusable inputs before reading anything
    for path in args.original.iter().chain(args.new.iter()) {
        validate_input_file(path)?;
    }

    // Create adapters (Dependency Injection)
    let use_case = DiffDependencyTreesUseCase::new(
        FileSystemReader::new(),
        MavenTreeParser::new(),
        StderrProgressReporter::new(),
    );

    let request = DiffRequest::builder()
        .original_files(args.original.iter().cloned())
        .new_files(args.new.iter().cloned())
        .exclude_patterns(options.exclude)
        .build()?;

    let response = use_case.execute(request)?;

    // Console sink first, then the configured extras in order
    let console_target = ConsoleTarget::for_reporters(&options.reporters);
    let console = ReporterFactory::create_default(console_target, use_color(&args, console_target));
    let mut dispatcher = ReportingDispatcher::new(console)
        .with_reporters(ReporterFactory::create_all(&options.reporters));

    for spec in &options.reporters {
        eprintln!("{}", ReporterFactory::progress_message(spec.format));
    }

    dispatcher.dispatch(&response.diff)?;

    if options.fail_on_changes && !response.diff.is_empty() {
        return Ok(ExitCode::ChangesDetected);
    }
    Ok(ExitCode::Success)
}

/// Loads the explicit `--config` file, or the one in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

fn use_color(args: &Args, target: ConsoleTarget) -> bool {
    !args.no_color && std::env::var_os("NO_COLOR").is_none() && target.is_terminal()
}
