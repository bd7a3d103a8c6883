use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, Phone};
use std::fmt;

/// One contact: a name fixed at creation, its phones in the order they were
/// added, and an optional birthday.
///
/// Phones are not deduplicated; adding the same number twice keeps both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Removes the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replaces `old` with `new` at the same position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Sets the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    pub(crate) fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    pub(crate) fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            f.write_str("no phones")?;
        } else {
            let joined: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            f.write_str(&joined.join("; "))?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("John").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn new_record_validates_name() {
        assert!(matches!(
            Record::new("  "),
            Err(BookError::Validation(ValidationError::EmptyName))
        ));
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn add_phone_keeps_duplicates_in_order() {
        let record = record_with(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn add_phone_propagates_validation() {
        let mut record = Record::new("John").unwrap();
        let err = record.add_phone("12").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::PhoneLength)
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_drops_first_match_only() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn remove_missing_phone_fails() {
        let mut record = record_with(&["1111111111"]);
        let err = record.remove_phone("3333333333").unwrap_err();
        assert_eq!(err.to_string(), "Phone 3333333333 not found");
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = record_with(&["0000000000", "1111111111", "9999999999"]);
        record.edit_phone("1111111111", "2222222222").unwrap();

        assert!(record.find_phone("1111111111").is_none());
        assert!(record.find_phone("2222222222").is_some());
        assert_eq!(record.phones()[1].as_str(), "2222222222");
        assert_eq!(record.phones().len(), 3);
    }

    #[test]
    fn edit_phone_checks_old_before_new() {
        let mut record = record_with(&["1111111111"]);
        let err = record.edit_phone("3333333333", "bad").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(p) if p == "3333333333"));

        let err = record.edit_phone("1111111111", "bad").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::PhoneNotDigits)
        ));
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn add_birthday_last_write_wins() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");

        assert!(record.add_birthday("30.02.1992").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn display_without_phones_or_birthday() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: no phones");
    }

    #[test]
    fn display_with_phones_and_birthday() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        record.add_birthday("05.03.1985").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday: 05.03.1985"
        );
    }
}
