use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod serve;
pub mod study;
pub mod syllabus;
pub mod transcript;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Start an interactive study session against a running server
    Study {
        /// Base URL of the API server
        #[arg(long, default_value = "http://127.0.0.1:2222")]
        server: String,
    },
    /// Generate a syllabus and print it as JSON
    Syllabus {
        #[arg(long)]
        topic: String,
    },
    /// Fetch a video transcript and print it as JSON
    Transcript {
        #[arg(long)]
        url: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Study { server }) => {
            study::run(&server).await?;
        }
        Some(Command::Syllabus { topic }) => {
            syllabus::run(&topic).await?;
        }
        Some(Command::Transcript { url }) => {
            transcript::run(&url).await?;
        }
        None => {}
    }

    Ok(())
}
