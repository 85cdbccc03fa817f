use crate::demo::{run_demo, run_forecast_demand, run_forecast_pricing, DemoArgs, ForecastArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hotel_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hotel Revenue Copilot",
    about = "Demonstrate and run the hotel revenue decision service from the command line",
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
    /// Score demand or derive pricing for a single date
    Forecast {
        #[command(subcommand)]
        command: ForecastCommand,
    },
    /// Run an end-to-end CLI demo covering demand, pricing, and sentiment
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ForecastCommand {
    /// Score booking demand for a date and room type
    Demand(ForecastArgs),
    /// Recommend a nightly price for a date and room type
    Pricing(ForecastArgs),
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
        Command::Forecast {
            command: ForecastCommand::Demand(args),
        } => run_forecast_demand(args),
        Command::Forecast {
            command: ForecastCommand::Pricing(args),
        } => run_forecast_pricing(args),
        Command::Demo(args) => run_demo(args),
    }
}
