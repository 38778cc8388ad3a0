//! visitcount-client CLI entry point.

use clap::Parser;
use visitcount_client::cli::{Cli, Commands, OutputFormat};
use visitcount_client::client::VisitClient;
use visitcount_client::identity::load_or_create_user_id;
use visitcount_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = VisitClient::new(&cli.endpoint);

    match cli.command {
        Commands::Record { user_id, id_file } => {
            let user_id = match user_id {
                Some(user_id) => user_id,
                None => load_or_create_user_id(&id_file)?,
            };
            let response = client.record_visit(&user_id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    if cli.quiet {
                        println!("{}", response.visit_count);
                    } else {
                        println!("{}", pretty::format_recorded(&user_id, &response));
                    }
                }
            }
        }
        Commands::Preflight => {
            let ack = client.preflight().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&ack, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", pretty::format_ack(client.endpoint(), &ack));
                    }
                }
            }
        }
    }

    Ok(())
}
