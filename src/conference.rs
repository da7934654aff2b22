use crate::reporting::log;
use crate::reporting::reporter::LogSender;

use crossterm::style::Stylize;

use std::fmt;

const SEPARATOR_WIDTH: usize = 50;

/// A contact detail that may have been left out.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Detail {
    Provided(String),
    #[default]
    NotProvided
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Provided(value) => write!(f, "{}", value),
            Detail::NotProvided => write!(f, "N/A")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub email: Detail,
    pub phone: Detail
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConferenceSignup {
    participants: Vec<String>,
    contact: ContactDetails
}

impl ConferenceSignup {
    pub fn new<I, S>(participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        ConferenceSignup { participants: participants.into_iter().map(Into::into).collect(), contact: ContactDetails::default() }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.contact.email = Detail::Provided(email.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.contact.phone = Detail::Provided(phone.to_string());
        self
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }
}

impl fmt::Display for ConferenceSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        writeln!(f, "Conference Participants and Their Contact Details:")?;
        writeln!(f, "{}", separator)?;

        if self.participants.is_empty() {
            return writeln!(f, "No participants registered for the conference.");
        }

        for (i, participant) in self.participants.iter().enumerate() {
            writeln!(f, "Name: {}", participant)?;
            writeln!(f, "Email: {}", self.contact.email)?;
            writeln!(f, "Phone: {}", self.contact.phone)?;
            if i + 1 < self.participants.len() {
                writeln!(f, "{}", separator)?;
            }
        }

        writeln!(f, "{}", separator)?;
        writeln!(f, "Total Participants: {}", self.participants.len())?;
        writeln!(f, "Contact Email: {}", self.contact.email)?;
        writeln!(f, "Contact Phone: {}", self.contact.phone)
    }
}

fn log(log_sender: &LogSender, level: log::Level, text: String) {
    let _ = log_sender.send(log::create("conference", level, text));
}

fn show(log_sender: &LogSender, title: &str, signup: &ConferenceSignup) {
    println!("\n{}", title.bold());
    print!("{}", signup);
    log(log_sender, log::Level::Debug, format!("Printed summary for {} participants", signup.participants().len()));
}

/// Prints the summary for participants given on the command line.
pub fn run_signup(log_sender: LogSender, participants: Vec<String>, email: Option<String>, phone: Option<String>) {
    let mut signup = ConferenceSignup::new(participants);
    if let Some(email) = email {
        signup = signup.with_email(&email);
    }
    if let Some(phone) = phone {
        signup = signup.with_phone(&phone);
    }
    if signup.participants().is_empty() {
        log(&log_sender, log::Level::Info, "Sign-up requested without participants".to_string());
    }
    show(&log_sender, "Conference Sign-up:", &signup);
}

pub fn run(log_sender: LogSender) {
    println!("{}", "CONFERENCE SIGN-UP SYSTEM DEMONSTRATION".bold());
    println!("{}", "=".repeat(60));

    show(&log_sender, "Expected Output Format:",
         &ConferenceSignup::new(["Alice", "Bob", "Charlie"]).with_email("alice@example.com").with_phone("123-456-7890"));
    show(&log_sender, "Additional Demonstration:",
         &ConferenceSignup::new(["David", "Eve", "Frank"]).with_email("david@example.com").with_phone("987-654-3210"));
    show(&log_sender, "Handling Missing Contact Details:",
         &ConferenceSignup::new(["Grace", "Henry", "Ivy"]).with_email("grace@example.com"));
    log(&log_sender, log::Level::Info, "Sign-up demonstration finished".to_string());
    println!();
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[test]
fn test_many_participants() {
    let signup = ConferenceSignup::new(["Alice", "Bob", "Charlie"]).with_email("alice@example.com").with_phone("123-456-7890");
    let dashes = "-".repeat(SEPARATOR_WIDTH);
    let expected = format!("Conference Participants and Their Contact Details:\n{d}\n\
                            Name: Alice\nEmail: alice@example.com\nPhone: 123-456-7890\n{d}\n\
                            Name: Bob\nEmail: alice@example.com\nPhone: 123-456-7890\n{d}\n\
                            Name: Charlie\nEmail: alice@example.com\nPhone: 123-456-7890\n{d}\n\
                            Total Participants: 3\nContact Email: alice@example.com\nContact Phone: 123-456-7890\n", d = dashes);
    assert_eq!(signup.to_string(), expected);
}

#[test]
fn test_single_participant() {
    let summary = ConferenceSignup::new(["David"]).with_email("david@example.com").with_phone("555-123-4567").to_string();
    assert_eq!(summary.matches(&"-".repeat(SEPARATOR_WIDTH)).count(), 2);
    assert!(summary.contains("Name: David\nEmail: david@example.com\nPhone: 555-123-4567\n"));
    assert!(summary.contains("Total Participants: 1\n"));
}

#[test]
fn test_missing_details_use_sentinel() {
    let only_email = ConferenceSignup::new(["Eve", "Frank", "Grace"]).with_email("eve@example.com");
    assert_eq!(only_email.contact().phone, Detail::NotProvided);
    assert!(only_email.to_string().contains("Contact Email: eve@example.com\nContact Phone: N/A\n"));

    let only_phone = ConferenceSignup::new(["Henry", "Ivy", "Jack"]).with_phone("555-987-6543");
    assert!(only_phone.to_string().ends_with("Contact Email: N/A\nContact Phone: 555-987-6543\n"));

    let nothing = ConferenceSignup::new(["Kate", "Liam", "Mia", "Noah"]);
    assert_eq!(nothing.to_string().matches("Email: N/A").count(), 5);
    assert!(nothing.to_string().contains("Total Participants: 4\n"));
}

#[test]
fn test_no_participants() {
    let expected = format!("Conference Participants and Their Contact Details:\n{}\nNo participants registered for the conference.\n", "-".repeat(SEPARATOR_WIDTH));
    assert_eq!(ConferenceSignup::new(Vec::<String>::new()).with_email("admin@conference.com").with_phone("555-000-0000").to_string(), expected);
    assert_eq!(ConferenceSignup::new(Vec::<String>::new()).to_string(), expected);
}

#[test]
fn test_participants_keep_order() {
    let signup = ConferenceSignup::new(vec!["Zoe".to_string(), "Adam".to_string()]);
    assert_eq!(signup.participants(), &["Zoe".to_string(), "Adam".to_string()]);
}
