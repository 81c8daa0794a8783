use crate::demo::{run_demo, run_snapshot_report, DemoArgs, SnapshotReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use str_snapshot::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "STR Performance Snapshot",
    about = "Compute and serve short-term rental performance snapshots from the command line",
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
    /// Compute a two-property performance snapshot for stakeholder reviews
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommand,
    },
    /// Run the snapshot report against the bundled sample dataset
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SnapshotCommand {
    /// Compare two properties from a performance CSV export
    Report(SnapshotReportArgs),
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
        Command::Snapshot {
            command: SnapshotCommand::Report(args),
        } => run_snapshot_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
