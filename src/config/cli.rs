use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "hbnb-client")]
#[command(about = "Browse places, read reviews and post your own from the terminal")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "API base URL, e.g. http://127.0.0.1:5000/api/v1")]
    pub api_base: Option<String>,

    #[arg(long, global = true, help = "Where the session token is stored")]
    pub session_file: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List places, optionally filtered by maximum price per night
    Places {
        #[arg(long, help = "Maximum price per night, or \"all\"")]
        max_price: Option<String>,
    },
    /// Show one place with its amenities and reviews
    Place {
        #[arg(long, conflicts_with = "href", required_unless_present = "href")]
        id: Option<String>,
        #[arg(long, help = "Page link such as place.html?id=<ID>")]
        href: Option<String>,
    },
    /// Log in and remember the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Submit a review for a place (requires login)
    Review {
        #[arg(long)]
        place_id: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        rating: u8,
    },
}
