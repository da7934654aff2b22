use std::any::Any;
use std::fmt;

/// A single address book entry. Fields are plain text and never validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    first_name: String,
    last_name: String,
    birthday: String,
    email: String,
    street_address: String,
    city: String,
    state: String,
    zip: String,
    phone: String
}

impl ContactRecord {
    pub fn new(first_name: &str, last_name: &str, birthday: &str, email: &str, street_address: &str, city: &str, state: &str, zip: &str, phone: &str) -> Self {
        ContactRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birthday: birthday.to_string(),
            email: email.to_string(),
            street_address: street_address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            phone: phone.to_string()
        }
    }

    pub fn get_first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = first_name.to_string();
    }

    pub fn get_last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = last_name.to_string();
    }

    /// Birthday as written by the caller, MM/DD/YYYY by convention.
    pub fn get_birthday(&self) -> &str {
        &self.birthday
    }

    pub fn set_birthday(&mut self, birthday: &str) {
        self.birthday = birthday.to_string();
    }

    pub fn get_email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn get_street_address(&self) -> &str {
        &self.street_address
    }

    pub fn set_street_address(&mut self, street_address: &str) {
        self.street_address = street_address.to_string();
    }

    pub fn get_city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    pub fn get_state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }

    pub fn get_zip(&self) -> &str {
        &self.zip
    }

    pub fn set_zip(&mut self, zip: &str) {
        self.zip = zip.to_string();
    }

    pub fn get_phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    /// Every field on its own labeled line, followed by an empty line.
    pub fn info_card(&self) -> String {
        let labeled_fields = [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Birthday", &self.birthday),
            ("Email", &self.email),
            ("Street Address", &self.street_address),
            ("City", &self.city),
            ("State", &self.state),
            ("Zip", &self.zip),
            ("Phone", &self.phone)
        ];

        let mut card = String::new();
        for (label, value) in labeled_fields {
            card.push_str(&format!("{}: {}\n", label, value));
        }
        card.push('\n');
        card
    }

    /// Equality against a value of any type. Anything that is not a `ContactRecord` is never equal.
    pub fn is_same_as(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<ContactRecord>() {
            Some(record) => self == record,
            None => false
        }
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {} - {}", self.first_name, self.last_name, self.email, self.phone)
    }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[cfg(test)]
fn john_doe() -> ContactRecord {
    ContactRecord::new("John", "Doe", "01/01/1990", "john.doe@example.com", "123 Main St", "Anytown", "NY", "12345", "555-555-5555")
}

#[test]
fn test_fields_read_back() {
    let record = john_doe();
    assert_eq!(record.get_first_name(), "John");
    assert_eq!(record.get_last_name(), "Doe");
    assert_eq!(record.get_birthday(), "01/01/1990");
    assert_eq!(record.get_email(), "john.doe@example.com");
    assert_eq!(record.get_street_address(), "123 Main St");
    assert_eq!(record.get_city(), "Anytown");
    assert_eq!(record.get_state(), "NY");
    assert_eq!(record.get_zip(), "12345");
    assert_eq!(record.get_phone(), "555-555-5555");
}

#[test]
fn test_setters_accept_anything() {
    let mut record = john_doe();
    record.set_first_name("");
    record.set_last_name("O'Brien");
    record.set_birthday("not a date");
    record.set_email("no-at-sign");
    record.set_street_address("Flat 2, 1 Long Rd");
    record.set_city("Łódź");
    record.set_state("");
    record.set_zip("ABC");
    record.set_phone("+48 123 456 789");

    assert_eq!(record.get_first_name(), "");
    assert_eq!(record.get_last_name(), "O'Brien");
    assert_eq!(record.get_birthday(), "not a date");
    assert_eq!(record.get_email(), "no-at-sign");
    assert_eq!(record.get_street_address(), "Flat 2, 1 Long Rd");
    assert_eq!(record.get_city(), "Łódź");
    assert_eq!(record.get_state(), "");
    assert_eq!(record.get_zip(), "ABC");
    assert_eq!(record.get_phone(), "+48 123 456 789");
}

#[test]
fn test_equality() {
    let original = john_doe();
    assert_eq!(original, john_doe());

    let setters: [fn(&mut ContactRecord, &str); 9] = [
        ContactRecord::set_first_name,
        ContactRecord::set_last_name,
        ContactRecord::set_birthday,
        ContactRecord::set_email,
        ContactRecord::set_street_address,
        ContactRecord::set_city,
        ContactRecord::set_state,
        ContactRecord::set_zip,
        ContactRecord::set_phone
    ];
    for set in setters {
        let mut changed = john_doe();
        set(&mut changed, "changed");
        assert_ne!(original, changed);
    }
}

#[test]
fn test_is_same_as() {
    let record = john_doe();
    assert!(record.is_same_as(&john_doe()));

    let mut other = john_doe();
    other.set_zip("54321");
    assert!(!record.is_same_as(&other));
    assert!(!record.is_same_as(&"John Doe - john.doe@example.com - 555-555-5555"));
    assert!(!record.is_same_as(&42));
}

#[test]
fn test_info_card() {
    let expected = "First Name: John\n\
                    Last Name: Doe\n\
                    Birthday: 01/01/1990\n\
                    Email: john.doe@example.com\n\
                    Street Address: 123 Main St\n\
                    City: Anytown\n\
                    State: NY\n\
                    Zip: 12345\n\
                    Phone: 555-555-5555\n\n";
    assert_eq!(john_doe().info_card(), expected);
}

#[test]
fn test_summary_and_representation() {
    let record = john_doe();
    assert_eq!(format!("{}", record), "John Doe - john.doe@example.com - 555-555-5555");

    let representation = format!("{:?}", record);
    assert!(representation.starts_with("ContactRecord {"));
    for field in ["first_name: \"John\"", "last_name: \"Doe\"", "birthday: \"01/01/1990\"", "email: \"john.doe@example.com\"",
                  "street_address: \"123 Main St\"", "city: \"Anytown\"", "state: \"NY\"", "zip: \"12345\"", "phone: \"555-555-5555\""] {
        assert!(representation.contains(field), "missing {} in {}", field, representation);
    }
}
