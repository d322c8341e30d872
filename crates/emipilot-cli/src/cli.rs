//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// EMI Pilot - Track recurring loan installments against your income
#[derive(Parser)]
#[command(name = "emipilot")]
#[command(about = "Personal EMI and income tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "emipilot.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Manage EMIs (list, add, update, delete)
    Emis {
        #[command(subcommand)]
        action: Option<EmisAction>,
    },

    /// Show or set monthly income
    Income {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },

    /// Show burden summary, week timeline, and insights
    Dashboard,
}

#[derive(Subcommand)]
pub enum EmisAction {
    /// List all EMIs
    List,

    /// Add a new EMI
    Add {
        /// Label for the installment
        name: String,

        /// Monthly amount (must be > 0)
        #[arg(short, long)]
        amount: f64,

        /// Day of month the installment falls due (1-31)
        #[arg(short, long)]
        due: u8,

        /// Loan type label (e.g., home, auto, personal)
        #[arg(short, long)]
        loan_type: Option<String>,

        /// Months remaining on the loan
        #[arg(short, long)]
        tenure: Option<u32>,
    },

    /// Update fields of an existing EMI
    Update {
        /// EMI id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        amount: Option<f64>,

        #[arg(short, long)]
        due: Option<u8>,

        #[arg(short, long)]
        loan_type: Option<String>,

        #[arg(short, long)]
        tenure: Option<u32>,
    },

    /// Delete an EMI
    Delete {
        /// EMI id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum IncomeAction {
    /// Show the current monthly income
    Show,

    /// Set the monthly income
    Set {
        /// Monthly income (must be >= 0)
        amount: f64,
    },
}
