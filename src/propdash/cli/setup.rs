use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propdash", bin_name = "propdash", version)]
#[command(
    about = "Property management dashboard for the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the overview: KPIs, revenue chart, recent activity
    #[command(display_order = 1)]
    Dashboard {
        /// Chart granularity: daily, weekly, monthly or yearly
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List properties
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search term, matched against name and address
        #[arg(short, long)]
        search: Option<String>,

        /// Status: active, vacant or archived
        #[arg(long)]
        status: Option<String>,

        /// City, matched case-insensitively
        #[arg(long)]
        city: Option<String>,

        /// Unit count bucket: 1-5, 6-20, 21+
        #[arg(long)]
        units: Option<String>,

        /// Vacancy: available, fully_occupied, partially_vacant
        #[arg(long)]
        vacancy: Option<String>,

        /// Monthly revenue bucket: 0-1000, 1000-2500, 2500-5000, 5000+
        #[arg(long)]
        price: Option<String>,

        /// Amenity tags (any match), e.g. luxury gym pet_friendly
        #[arg(long, num_args = 1..)]
        tags: Vec<String>,

        /// Render as a card grid instead of a table
        #[arg(long)]
        grid: bool,
    },

    /// Add a property
    #[command(display_order = 3)]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long, default_value_t = 1)]
        total_units: i64,

        #[arg(long, default_value_t = 0)]
        occupied_units: i64,

        /// Monthly revenue in whole dollars
        #[arg(long, default_value_t = 0)]
        revenue: i64,

        /// Contact id of the property manager
        #[arg(long)]
        manager: u32,

        /// Contact id of the property owner
        #[arg(long)]
        owner: u32,

        /// Amenity tags
        #[arg(long, num_args = 0..)]
        tags: Vec<String>,
    },

    /// Edit a property (unspecified fields keep their value)
    #[command(display_order = 4)]
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        total_units: Option<i64>,

        #[arg(long)]
        occupied_units: Option<i64>,

        #[arg(long)]
        revenue: Option<i64>,

        #[arg(long)]
        manager: Option<u32>,

        #[arg(long)]
        owner: Option<u32>,
    },

    /// Archive one or more properties
    #[command(display_order = 5)]
    Archive {
        /// Property ids (e.g. 1 4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Send payment reminders for one or more properties
    #[command(display_order = 6)]
    Remind {
        /// Property ids (e.g. 1 4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Export properties to CSV
    #[command(display_order = 7)]
    Export {
        /// Property ids; if omitted, exports every property
        #[arg(required = false, num_args = 0..)]
        ids: Vec<u64>,

        /// Output file (default: properties.csv in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List recent payments
    #[command(display_order = 8)]
    Payments,

    /// Mark a payment as paid
    #[command(display_order = 9)]
    Pay {
        /// Payment id
        id: u64,
    },

    /// Print the receipt for a payment
    #[command(display_order = 10)]
    Receipt {
        /// Payment id
        id: u64,
    },

    /// List contacts available as managers and owners
    #[command(display_order = 11)]
    Contacts,

    /// Show notifications
    #[command(display_order = 12)]
    Notifications {
        /// Mark every notification as read
        #[arg(long)]
        read_all: bool,
    },

    /// List the cities available for filtering
    #[command(display_order = 13)]
    Cities,

    /// Get or set preferences (keys: view, period, export-dir)
    #[command(display_order = 14)]
    Config {
        /// Preference key
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
