mod contact;

pub use contact::ContactRecord;

use crate::reporting::log;
use crate::reporting::reporter::LogSender;

use crossterm::style::Stylize;

fn log(log_sender: &LogSender, level: log::Level, text: String) {
    let _ = log_sender.send(log::create("address_book", level, text));
}

fn header(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(50));
}

pub fn run(log_sender: LogSender) {
    let mut entries = vec![
        ContactRecord::new("John", "Doe", "01/01/1990", "john.doe@example.com", "123 Main St", "Anytown", "NY", "12345", "555-555-5555"),
        ContactRecord::new("Jane", "Smith", "02/02/1985", "jane.smith@example.com", "456 Elm St", "Othertown", "CA", "67890", "555-555-1234"),
        ContactRecord::new("Emily", "Johnson", "03/03/1975", "emily.johnson@example.com", "789 Oak St", "Sometown", "TX", "11111", "555-555-6789"),
        ContactRecord::new("Michael", "Brown", "04/04/1965", "michael.brown@example.com", "101 Pine St", "Anycity", "FL", "22222", "555-555-2468")
    ];
    log(&log_sender, log::Level::Info, format!("Created {} address book entries", entries.len()));

    header("Address Book Entries:");
    for entry in &entries {
        print!("{}", entry.info_card());
    }

    header("Demonstrating Magic Methods:");
    let first_copy = entries[0].clone();
    println!("Summary (Display):\n{}\n", entries[0]);
    println!("Full representation (Debug):\n{:?}\n", entries[0]);
    println!("Equality comparison:");
    println!("first == copy of first: {}", entries[0] == first_copy);
    println!("first == second: {}\n", entries[0] == entries[1]);

    header("Demonstrating Getter and Setter Methods:");
    let person = &mut entries[0];
    println!("Original email: {}", person.get_email());
    person.set_email("john.doe.updated@example.com");
    println!("Updated email: {}\n", person.get_email());
    log(&log_sender, log::Level::Debug, format!("Email of {} {} updated", person.get_first_name(), person.get_last_name()));

    println!("Original phone: {}", person.get_phone());
    person.set_phone("555-123-4567");
    println!("Updated phone: {}", person.get_phone());
    log(&log_sender, log::Level::Debug, format!("Phone of {} {} updated", person.get_first_name(), person.get_last_name()));
    println!();
}
