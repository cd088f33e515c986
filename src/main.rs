use clap::Parser;
use questions::application::{init::init, QuestionService};
use questions::cli::{format_area_list, format_question_list, Cli, Commands};
use questions::domain::QuestionFilter;
use questions::error::{QuestionsError, Result};
use questions::infrastructure::config::resolve_root;
use questions::infrastructure::{JsonFileRepository, ServerConfig};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init_logging(tracing::Level::WARN, cli.verbose);
            let path = match path {
                Some(path) => path,
                None => resolve_root(cli.root)?,
            };
            let repo = init(&path)?;
            println!("Initialized question bank at {}", path.display());
            println!("Data: {}", repo.path.display());
            Ok(())
        }
        Commands::Serve { bind } => {
            let root = resolve_root(cli.root)?;
            let mut config = ServerConfig::load_from_dir(&root)?;
            if let Some(bind) = bind {
                config.bind = bind;
            }
            init_logging(config.level()?, cli.verbose);

            let addr = config.bind_addr()?;
            let repo = JsonFileRepository::open(config.data_path(&root))?;
            let service = QuestionService::new(repo);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(questions::http::serve(addr, service))
        }
        Commands::List {
            area,
            subject,
            course,
            tag,
        } => {
            init_logging(tracing::Level::WARN, cli.verbose);
            let service = open_existing(&resolve_root(cli.root)?)?;
            let filter = QuestionFilter {
                area,
                subject,
                course,
                tag,
            };
            let questions = service.filter(&filter)?;
            print!("{}", format_question_list(&questions));
            Ok(())
        }
        Commands::Areas => {
            init_logging(tracing::Level::WARN, cli.verbose);
            let service = open_existing(&resolve_root(cli.root)?)?;
            let areas = service.list_areas()?;
            print!("{}", format_area_list(&areas));
            Ok(())
        }
    }
}

/// Service over an already initialized bank; read-only commands never
/// create the document.
fn open_existing(root: &Path) -> Result<QuestionService> {
    let config = ServerConfig::load_from_dir(root)?;
    let path = config.data_path(root);
    if !path.is_file() {
        return Err(QuestionsError::Config(format!(
            "No question bank found at {}",
            path.display()
        )));
    }
    Ok(QuestionService::new(JsonFileRepository::new(path)))
}

/// Initialize the tracing subscriber; logs go to stderr
fn init_logging(level: tracing::Level, verbose: bool) {
    let level = if verbose {
        level.max(tracing::Level::DEBUG)
    } else {
        level
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}
