use crate::dogs::{BaseProvider, BreedGroup, Dog, DogBase};

/// Bred for hunting and retrieving game.
#[derive(Clone, Debug, PartialEq)]
pub struct SportingDog {
    base: DogBase,
    hunting_ability: String,
    water_resistance: bool
}

impl SportingDog {
    /// Water resistant unless told otherwise with `with_water_resistance`.
    pub fn create(base: DogBase, hunting_ability: &str) -> Self {
        SportingDog { base: base, hunting_ability: hunting_ability.to_string(), water_resistance: true }
    }

    pub fn with_water_resistance(mut self, water_resistance: bool) -> Self {
        self.water_resistance = water_resistance;
        self
    }

    pub fn hunt(&self) -> String {
        format!("This {} hunting dog is tracking game!", self.hunting_ability)
    }

    pub fn retrieve(&self) -> String {
        format!("This {} sporting dog is retrieving the ball.", self.base.color)
    }

    pub fn swim(&self) -> String {
        if self.water_resistance {
            format!("This {} sporting dog is swimming in the water!", self.base.color)
        }
        else {
            format!("This {} sporting dog prefers to stay on land.", self.base.color)
        }
    }
}

impl BaseProvider for SportingDog {
    fn base(&self) -> &DogBase {
        &self.base
    }
}

impl Dog for SportingDog {
    fn describe(&self) -> String {
        format!("{}\n  Hunting Ability: {}\n  Water Resistant: {}",
                self.base.describe(), self.hunting_ability, if self.water_resistance { "Yes" } else { "No" })
    }

    fn breed_group(&self) -> BreedGroup {
        BreedGroup::Sporting
    }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[cfg(test)]
fn golden_retriever() -> SportingDog {
    SportingDog::create(DogBase::create(65, "21.5-24 inches", "10-12 years", "golden"), "excellent")
}

#[test]
fn test_water_resistance_defaults_to_true() {
    assert!(golden_retriever().water_resistance);
    assert!(!golden_retriever().with_water_resistance(false).water_resistance);
}

#[test]
fn test_swim() {
    assert_eq!(golden_retriever().swim(), "This golden sporting dog is swimming in the water!");
    assert_eq!(golden_retriever().with_water_resistance(false).swim(), "This golden sporting dog prefers to stay on land.");
}

#[test]
fn test_specialized_behaviors() {
    let dog = golden_retriever();
    assert_eq!(dog.hunt(), "This excellent hunting dog is tracking game!");
    assert_eq!(dog.retrieve(), "This golden sporting dog is retrieving the ball.");
    assert_eq!(dog.breed_group(), BreedGroup::Sporting);
}

#[test]
fn test_describe_extends_base() {
    let expected = "Dog Information:\n  Average Weight: 65 pounds\n  Height Range: 21.5-24 inches\n  Life Span: 10-12 years\n  Color: golden\n  Hunting Ability: excellent\n  Water Resistant: Yes";
    assert_eq!(golden_retriever().describe(), expected);

    let landlubber = golden_retriever().with_water_resistance(false).describe();
    assert!(landlubber.starts_with(&golden_retriever().base().describe()));
    assert!(landlubber.ends_with("  Hunting Ability: excellent\n  Water Resistant: No"));
}
