use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use deskview::commands::{LsOptions, cmd_dash, cmd_ls, cmd_rm, cmd_show, cmd_status};
use deskview::types::{TicketStatus, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "deskview")]
#[command(about = "Terminal support-ticket dashboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dash,

    /// List tickets as a table
    Ls {
        /// Filter by status (pending, open, resolved, other)
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Case-insensitive substring filter over id, title and submitter
        #[arg(short, long)]
        query: Option<String>,

        /// Page to show
        #[arg(long, default_value = "1")]
        page: usize,

        /// Tickets per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Display a single ticket
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        id: String,
    },

    /// Set a ticket's status
    Status {
        /// Ticket ID
        id: String,

        /// New status (pending, open, resolved, other)
        #[arg(value_parser = parse_status)]
        status: TicketStatus,
    },

    /// Remove a ticket
    Rm {
        /// Ticket ID
        id: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: Shell,
    },
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Dash) => cmd_dash(),

        Some(Commands::Ls {
            status,
            query,
            page,
            page_size,
        }) => cmd_ls(LsOptions {
            status,
            query,
            page,
            page_size,
        }),

        Some(Commands::Show { id }) => cmd_show(&id),
        Some(Commands::Status { id, status }) => cmd_status(&id, status),
        Some(Commands::Rm { id }) => cmd_rm(&id),

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "deskview", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
