use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Answer a natural-language question against the inventory
    Ask {
        question: String,
    },

    /// Print the SQL a question translates to, without running it
    Translate {
        question: String,
    },

    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },

    Supplier {
        #[command(subcommand)]
        command: SupplierCommands,
    },
}

#[derive(Subcommand)]
pub enum ProductCommands {
    Add {
        name: String,

        #[arg(short, long)]
        quantity: i32,

        #[arg(short, long)]
        price: f64,

        #[arg(short, long)]
        supplier_id: i64,
    },

    Get {
        id: i64,
    },

    List,
}

#[derive(Subcommand)]
pub enum SupplierCommands {
    Add {
        name: String,
    },

    List,
}
