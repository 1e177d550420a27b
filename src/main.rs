use clap::{Parser, Subcommand};
use pension::api::{self, ProjectArgs};
use pension::logging;

#[derive(Parser, Debug)]
#[command(
    name = "pension",
    about = "Retirement savings projector: savings needed each year to cover the pension gap"
)]
struct Cli {
    #[arg(long, short, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the calculator page and the JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print the projection for one set of inputs
    Project(ProjectArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = api::run_http_server(port).await {
                tracing::error!("server error: {e}");
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project(args) => match api::run_cli_projection(&args) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
    }
}
