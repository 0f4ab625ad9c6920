use crate::demo::{
    run_chat, run_demo, run_scheme_check, run_scheme_list, ChatArgs, CheckArgs, DemoArgs, ListArgs,
};
use crate::server;
use bharat_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AI for Bharat",
    about = "Run the AI for Bharat service or explore schemes and the assistant from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse the scheme catalog or check eligibility
    Schemes {
        #[command(subcommand)]
        command: SchemesCommand,
    },
    /// Ask the scripted assistant a question
    Chat(ChatArgs),
    /// Run an end-to-end walkthrough of schemes, chat, signup and student tracking
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SchemesCommand {
    /// List active schemes, optionally filtered by category and search text
    List(ListArgs),
    /// Evaluate an applicant against every scheme in the catalog
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Schemes {
            command: SchemesCommand::List(args),
        } => run_scheme_list(args),
        Command::Schemes {
            command: SchemesCommand::Check(args),
        } => run_scheme_check(args),
        Command::Chat(args) => run_chat(args),
        Command::Demo(args) => run_demo(args),
    }
}
