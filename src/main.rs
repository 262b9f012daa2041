use clap::{Parser, Subcommand};
use git_sage::{AppError, ConfigUpdate};

#[derive(Parser)]
#[command(name = "gsg")]
#[command(version)]
#[command(about = "Review the current branch against the main branch with AI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 检查当前分支与主分支的代码差异
    Cr {
        /// 使用的prompt模板，默认为ccr
        #[arg(default_value = git_sage::DEFAULT_PROMPT)]
        prompt: String,
    },
    /// Write the bundled prompt templates into ./prompts
    Init {
        /// Overwrite existing template files
        #[arg(short, long)]
        force: bool,
    },
    /// Show or update ~/.git-sage/config.yml
    Config {
        /// Chat completions endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
        /// Model name
        #[arg(long)]
        model: Option<String>,
        /// API key sent as a bearer token
        #[arg(long)]
        api_key: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Cr { prompt } => {
            git_sage::review(&prompt);
            Ok(())
        }
        Commands::Init { force } => git_sage::init(force).map(|_| ()),
        Commands::Config { endpoint, model, api_key, timeout_secs } => {
            git_sage::configure(ConfigUpdate { endpoint, model, api_key, timeout_secs }).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
