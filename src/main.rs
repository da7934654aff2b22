use coursework::reporting::{log, reporter::Reporter};
use coursework::{address_book, best_practices, conference, dogs};

use crossterm::{execute, terminal::{Clear, ClearType}, cursor::MoveTo};

use std::io::stdout;
use std::path::PathBuf;

#[derive(clap::Parser)]
#[command(about = "Introductory programming exercises")]
struct Config {
    #[command(subcommand)]
    exercise: Option<Exercise>,
    #[arg(long, global = true, required = false, help = "path to file where logs will be saved")]
    log_file: Option<PathBuf>,
    #[arg(long, global = true, required = false, default_value = "info", help = "Available levels: debug, info, error")]
    log_level: String,
    #[arg(long, global = true, help = "Clear the terminal before running the exercise")]
    clear: bool
}

#[derive(clap::Subcommand)]
enum Exercise {
    #[command(about = "Compare two numbers, printing the larger one, a zero notice or their difference")]
    Compare {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String
    },
    #[command(about = "Address book entries: getters, setters, equality and representations")]
    AddressBook,
    #[command(about = "Dog breed groups sharing one interface")]
    Dogs,
    #[command(about = "Conference sign-up summary for any number of participants")]
    Signup {
        participants: Vec<String>,
        #[arg(long, help = "Contact email shared by all participants")]
        email: Option<String>,
        #[arg(long, help = "Contact phone shared by all participants")]
        phone: Option<String>
    },
    #[command(about = "Run every demonstration, the default")]
    All
}

#[tokio::main]
async fn main() {
    let config = <Config as clap::Parser>::parse();

    let (log_sender, log_receiver) = tokio::sync::mpsc::unbounded_channel::<log::Log>();
    let reporter = match Reporter::create(log_receiver, config.log_file, &config.log_level) {
        Ok(reporter) => reporter,
        Err(e) => {
            println!("Could not create a reporter: {}", e);
            std::process::exit(1);
        }
    };
    let reporter_handle = tokio::spawn(reporter.run());

    if config.clear {
        let _ = execute!(stdout(), Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0));
    }

    let result = match config.exercise.unwrap_or(Exercise::All) {
        Exercise::Compare { first, second } => best_practices::run_comparison(log_sender, &first, &second),
        Exercise::AddressBook => { address_book::run(log_sender); Ok(()) }
        Exercise::Dogs => { dogs::run(log_sender); Ok(()) }
        Exercise::Signup { participants, email, phone } => { conference::run_signup(log_sender, participants, email, phone); Ok(()) }
        Exercise::All => {
            best_practices::run(log_sender.clone());
            address_book::run(log_sender.clone());
            dogs::run(log_sender.clone());
            conference::run(log_sender);
            Ok(())
        }
    };

    let _ = reporter_handle.await;
    if let Err(e) = result {
        println!("Exercise failed: {}", e);
        std::process::exit(1);
    }
}
