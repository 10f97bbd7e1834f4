pub mod scan;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photoframe")]
#[command(version)]
#[command(about = "A photo-frame backend serving picture directories as JSON", long_about = None)]
pub struct Cli {
    /// Picture root; each subdirectory becomes a photo set
    #[arg(short = 'P', long, default_value = "pictures")]
    pub pictures: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Print the current photo-set catalog as JSON and exit
    Scan,
}
