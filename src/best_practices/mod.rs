mod comparison;
mod operand;

pub use comparison::{compare_numbers, ComparisonError, Outcome, Position};
pub use operand::{Number, Operand};

use crate::reporting::log;
use crate::reporting::reporter::LogSender;

use crossterm::style::Stylize;

const ORIGINAL_PROBLEMS: [&str; 7] = [
    "Single-letter variable names (a, b, i, j)",
    "Unclear function name (fx)",
    "No comments or documentation",
    "Inconsistent indentation",
    "Deep nesting levels",
    "No error handling",
    "No doc comments"
];

const IMPROVEMENTS: [&str; 8] = [
    "Meaningful variable and function names",
    "Comments and documentation where they help",
    "Consistent indentation",
    "Proper spacing and blank lines",
    "Simplified logic with helper functions",
    "Typed error for invalid inputs",
    "Doc comments on the public items",
    "Separation of computing from printing"
];

fn log(log_sender: &LogSender, level: log::Level, text: String) {
    let _ = log_sender.send(log::create("best_practices", level, text));
}

fn section(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "-".repeat(30));
}

fn show_comparison(log_sender: &LogSender, first: &Operand, second: &Operand) -> Result<Outcome, ComparisonError> {
    println!("Input: compare_numbers({}, {})", first, second);
    log(log_sender, log::Level::Debug, format!("Comparing {} with {}", first, second));
    match compare_numbers(first, second) {
        Ok(outcome) => {
            println!("Result:\n{}", outcome);
            Ok(outcome)
        }
        Err(e) => {
            println!("Error caught: {}", e);
            log(log_sender, log::Level::Error, e.to_string());
            Err(e)
        }
    }
}

/// Compares two operands given as raw text.
pub fn run_comparison(log_sender: LogSender, first: &str, second: &str) -> Result<(), String> {
    show_comparison(&log_sender, &Operand::from(first), &Operand::from(second))
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub fn run(log_sender: LogSender) {
    println!("{}", "BEST PRACTICES EXERCISE".bold());
    println!("{}", "=".repeat(50));

    section("ORIGINAL CODE PROBLEMS:");
    for (i, problem) in ORIGINAL_PROBLEMS.iter().enumerate() {
        println!("{}. {}", i + 1, problem);
    }

    section("IMPROVEMENTS MADE:");
    for (i, improvement) in IMPROVEMENTS.iter().enumerate() {
        println!("{}. {} {}", i + 1, "✓".green(), improvement);
    }

    let scenarios: [(&str, Vec<(Operand, Operand)>); 5] = [
        ("1. Positive numbers:", vec![(Operand::Integer(5), Operand::Integer(3)), (Operand::Integer(2), Operand::Integer(4))]),
        ("2. Zero values:", vec![(Operand::Integer(0), Operand::Integer(10)), (Operand::Integer(5), Operand::Integer(0))]),
        ("3. Negative numbers:", vec![(Operand::Integer(-5), Operand::Integer(-3)), (Operand::Integer(-2), Operand::Integer(-7))]),
        ("4. Mixed positive/negative:", vec![(Operand::Integer(-5), Operand::Integer(3)), (Operand::Integer(5), Operand::Integer(-3))]),
        ("5. Error handling:", vec![
            (Operand::Text("abc".to_string()), Operand::Integer(5)),
            (Operand::List(vec![Operand::Integer(1), Operand::Integer(2)]), Operand::Integer(5))
        ])
    ];

    let mut rejected = 0usize;
    for (title, pairs) in scenarios {
        section(title);
        for (first, second) in pairs {
            if show_comparison(&log_sender, &first, &second).is_err() {
                rejected += 1;
            }
        }
    }
    log(&log_sender, log::Level::Info, format!("Demonstration finished, {} invalid inputs rejected", rejected));
    println!();
}
