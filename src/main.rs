use std::env;
use std::io;
use std::process;

use tracing::{error, info};

use castq::config;
use castq::core::db::{ConnectionProvider, Credentials, QueryExecutor};
use castq::core::{CastqError, Result};
use castq::menu::Menu;

/// Exit status for a bad argument count.
const EXIT_USAGE: i32 = 0;
/// Exit status shared by the menu's exit choice and fatal store errors.
const EXIT_DONE: i32 = 1;

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let code = match run(&args) {
        Ok(()) => EXIT_DONE,
        Err(CastqError::Usage) => {
            println!("{}", CastqError::Usage);
            EXIT_USAGE
        }
        Err(e) => {
            error!("fatal: {}", e);
            println!("{}", e);
            EXIT_DONE
        }
    };
    process::exit(code);
}

fn run(args: &[String]) -> Result<()> {
    let [username, password] = args else {
        return Err(CastqError::Usage);
    };

    info!("starting castq");
    let config = config::load_default()?;
    let credentials = Credentials::new(username, password);
    let provider = ConnectionProvider::connect(&credentials)?;
    let executor = QueryExecutor::new(&provider);

    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        executor,
        config.table_widths(),
    );
    menu.run()
}
