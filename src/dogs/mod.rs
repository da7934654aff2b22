mod sporting;
mod working;

pub use sporting::SportingDog;
pub use working::WorkingDog;

use crate::reporting::log;
use crate::reporting::reporter::LogSender;

use crossterm::style::Stylize;

use std::fmt;

pub type Pounds = u32;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BreedGroup {
    Sporting,
    Working
}

impl fmt::Display for BreedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedGroup::Sporting => write!(f, "SportingDog"),
            BreedGroup::Working => write!(f, "WorkingDog")
        }
    }
}

/// Attributes every dog has, whatever its breed group.
#[derive(Clone, Debug, PartialEq)]
pub struct DogBase {
    average_weight: Pounds,
    height_range: String,
    life_span: String,
    color: String
}

impl DogBase {
    pub fn create(average_weight: Pounds, height_range: &str, life_span: &str, color: &str) -> Self {
        DogBase {
            average_weight: average_weight,
            height_range: height_range.to_string(),
            life_span: life_span.to_string(),
            color: color.to_string()
        }
    }

    fn describe(&self) -> String {
        format!("Dog Information:\n  Average Weight: {} pounds\n  Height Range: {}\n  Life Span: {}\n  Color: {}",
                self.average_weight, self.height_range, self.life_span, self.color)
    }
}

pub trait BaseProvider {
    fn base(&self) -> &DogBase;
}

pub trait Dog: BaseProvider {
    fn bark(&self) -> &'static str {
        "Woof! Woof!"
    }

    fn eat(&self) -> String {
        format!("This {} dog is eating its food.", self.base().color)
    }

    fn sleep(&self) -> String {
        format!("This {} pound dog is taking a nap.", self.base().average_weight)
    }

    /// Multi-line summary. Breed groups extend it with their own lines.
    fn describe(&self) -> String {
        self.base().describe()
    }

    fn breed_group(&self) -> BreedGroup;
}

fn log(log_sender: &LogSender, level: log::Level, text: String) {
    let _ = log_sender.send(log::create("dogs", level, text));
}

fn section(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "-".repeat(40));
}

pub fn run(log_sender: LogSender) {
    println!("{}", "Dog Classes Demonstration".bold());
    println!("{}", "=".repeat(50));

    println!("1. Creating a Sporting Dog (Golden Retriever):");
    let golden_retriever = SportingDog::create(DogBase::create(65, "21.5-24 inches", "10-12 years", "golden"), "excellent")
        .with_water_resistance(true);
    log(&log_sender, log::Level::Debug, format!("Created {:?}", golden_retriever));

    println!("2. Creating a Working Dog (German Shepherd):");
    let german_shepherd = WorkingDog::create(DogBase::create(75, "22-26 inches", "7-10 years", "black and tan"), "police work", "very strong");
    log(&log_sender, log::Level::Debug, format!("Created {:?}", german_shepherd));

    section("3. Demonstrating Basic Dog Behaviors (Shared):");
    for (name, dog) in [("Golden Retriever", &golden_retriever as &dyn Dog), ("German Shepherd", &german_shepherd as &dyn Dog)] {
        println!("{} basic behaviors:", name);
        println!("  Bark: {}", dog.bark());
        println!("  Eat: {}", dog.eat());
        println!("  Sleep: {}", dog.sleep());
    }

    section("4. Demonstrating Sporting Dog Specialized Behaviors:");
    println!("  Hunt: {}", golden_retriever.hunt());
    println!("  Retrieve: {}", golden_retriever.retrieve());
    println!("  Swim: {}", golden_retriever.swim());

    section("5. Demonstrating Working Dog Specialized Behaviors:");
    println!("  Guard: {}", german_shepherd.guard());
    println!("  Pull Sled: {}", german_shepherd.pull_sled());
    println!("  Search & Rescue: {}", german_shepherd.search_rescue());

    section("6. Demonstrating Polymorphism (describe method):");
    println!("Golden Retriever Information:\n{}", golden_retriever.describe());
    println!("\nGerman Shepherd Information:\n{}", german_shepherd.describe());

    section("7. Demonstrating Breed Groups:");
    println!("Is Golden Retriever a SportingDog? {}", golden_retriever.breed_group() == BreedGroup::Sporting);
    println!("Is German Shepherd a WorkingDog? {}", german_shepherd.breed_group() == BreedGroup::Working);
    println!("Is German Shepherd a SportingDog? {}", german_shepherd.breed_group() == BreedGroup::Sporting);

    section("8. Demonstrating Polymorphism with a List of Dogs:");
    let dogs: Vec<Box<dyn Dog>> = vec![Box::new(golden_retriever), Box::new(german_shepherd)];
    for (i, dog) in dogs.iter().enumerate() {
        println!("Dog {} ({}): {}", i + 1, dog.breed_group(), dog.bark());
    }
    log(&log_sender, log::Level::Info, format!("Walked a list of {} dogs through the shared interface", dogs.len()));
    println!();
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[cfg(test)]
fn mixed_pack() -> Vec<Box<dyn Dog>> {
    vec![
        Box::new(SportingDog::create(DogBase::create(65, "21.5-24 inches", "10-12 years", "golden"), "excellent")),
        Box::new(WorkingDog::create(DogBase::create(75, "22-26 inches", "7-10 years", "black and tan"), "police work", "very strong"))
    ]
}

#[test]
fn test_shared_behaviors() {
    let pack = mixed_pack();
    assert_eq!(pack[0].eat(), "This golden dog is eating its food.");
    assert_eq!(pack[0].sleep(), "This 65 pound dog is taking a nap.");
    assert_eq!(pack[1].eat(), "This black and tan dog is eating its food.");
    assert_eq!(pack[1].sleep(), "This 75 pound dog is taking a nap.");
}

#[test]
fn test_bark_is_constant_through_shared_interface() {
    for dog in mixed_pack() {
        assert_eq!(dog.bark(), "Woof! Woof!");
    }
}

#[test]
fn test_describe_dispatches_per_breed_group() {
    let pack = mixed_pack();
    let groups: Vec<BreedGroup> = pack.iter().map(|dog| dog.breed_group()).collect();
    assert_eq!(groups, vec![BreedGroup::Sporting, BreedGroup::Working]);

    let sporting = pack[0].describe();
    assert!(sporting.contains("Hunting Ability: excellent"));
    assert!(!sporting.contains("Work Type"));

    let working = pack[1].describe();
    assert!(working.contains("Work Type: police work"));
    assert!(!working.contains("Hunting Ability"));
}

#[test]
fn test_base_description() {
    let base = DogBase::create(30, "15-18 inches", "12-15 years", "white");
    assert_eq!(base.describe(), "Dog Information:\n  Average Weight: 30 pounds\n  Height Range: 15-18 inches\n  Life Span: 12-15 years\n  Color: white");
}

#[test]
fn test_breed_group_names() {
    assert_eq!(BreedGroup::Sporting.to_string(), "SportingDog");
    assert_eq!(BreedGroup::Working.to_string(), "WorkingDog");
}
