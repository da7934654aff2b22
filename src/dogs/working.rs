use crate::dogs::{BaseProvider, BreedGroup, Dog, DogBase};

/// Bred for tasks like guarding, pulling sleds or search and rescue.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkingDog {
    base: DogBase,
    work_type: String,
    strength_level: String
}

impl WorkingDog {
    pub fn create(base: DogBase, work_type: &str, strength_level: &str) -> Self {
        WorkingDog { base: base, work_type: work_type.to_string(), strength_level: strength_level.to_string() }
    }

    pub fn guard(&self) -> String {
        format!("This {} {} working dog is guarding the property!", self.strength_level, self.base.color)
    }

    pub fn pull_sled(&self) -> String {
        format!("This {} pound working dog is pulling a sled.", self.base.average_weight)
    }

    pub fn search_rescue(&self) -> String {
        format!("This {} dog is searching for survivors.", self.work_type)
    }
}

impl BaseProvider for WorkingDog {
    fn base(&self) -> &DogBase {
        &self.base
    }
}

impl Dog for WorkingDog {
    fn describe(&self) -> String {
        format!("{}\n  Work Type: {}\n  Strength Level: {}", self.base.describe(), self.work_type, self.strength_level)
    }

    fn breed_group(&self) -> BreedGroup {
        BreedGroup::Working
    }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[cfg(test)]
fn german_shepherd() -> WorkingDog {
    WorkingDog::create(DogBase::create(75, "22-26 inches", "7-10 years", "black and tan"), "police work", "very strong")
}

#[test]
fn test_specialized_behaviors() {
    let dog = german_shepherd();
    assert_eq!(dog.guard(), "This very strong black and tan working dog is guarding the property!");
    assert_eq!(dog.pull_sled(), "This 75 pound working dog is pulling a sled.");
    assert_eq!(dog.search_rescue(), "This police work dog is searching for survivors.");
    assert_eq!(dog.breed_group(), BreedGroup::Working);
}

#[test]
fn test_describe_extends_base() {
    let expected = "Dog Information:\n  Average Weight: 75 pounds\n  Height Range: 22-26 inches\n  Life Span: 7-10 years\n  Color: black and tan\n  Work Type: police work\n  Strength Level: very strong";
    assert_eq!(german_shepherd().describe(), expected);
}
