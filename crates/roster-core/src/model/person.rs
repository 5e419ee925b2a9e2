use crate::errors::Result;
use crate::rules::fields::{require_email, require_nonempty_string, require_nonneg_int};

/// Identity fields shared by students and instructors
///
/// All fields are private; every write goes through a validated setter that
/// replaces the field only when the new value passes its primitive check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
    email: String,
}

impl Person {
    /// Build a person from raw, untrusted input
    ///
    /// # Errors
    /// `Validation` for the first field that fails (name, then age, then email).
    pub fn new(name: &str, age: i64, email: &str) -> Result<Self> {
        Ok(Self {
            name: require_nonempty_string(name, "name")?,
            age: require_nonneg_int(age, "age")?,
            email: require_email(email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// # Errors
    /// `Validation` if `name` is blank; the old name is kept.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = require_nonempty_string(name, "name")?;
        Ok(())
    }

    /// # Errors
    /// `Validation` if `age` is negative; the old age is kept.
    pub fn set_age(&mut self, age: i64) -> Result<()> {
        self.age = require_nonneg_int(age, "age")?;
        Ok(())
    }

    /// # Errors
    /// `Validation` if `email` is malformed; the old address is kept.
    pub fn set_email(&mut self, email: &str) -> Result<()> {
        self.email = require_email(email)?;
        Ok(())
    }

    /// Deterministic greeting
    pub fn introduce(&self) -> String {
        format!("Hi, my name is {}, I am {} years old.", self.name, self.age)
    }

    /// Copy of this person with every supplied field of `edit` applied
    ///
    /// # Errors
    /// `Validation` for the first supplied field that fails (name, then age,
    /// then email). `self` is never modified.
    pub fn edited(&self, edit: &PersonEdit) -> Result<Self> {
        let mut candidate = self.clone();
        if let Some(name) = &edit.name {
            candidate.set_name(name)?;
        }
        if let Some(age) = edit.age {
            candidate.set_age(age)?;
        }
        if let Some(email) = &edit.email {
            candidate.set_email(email)?;
        }
        Ok(candidate)
    }
}

/// Optional changes to the person fields, applied all or nothing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEdit {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

/// Capability of any entity that embeds a [`Person`]
///
/// The provided methods are the only mutation path for name, age and email on
/// students and instructors, so both kinds share one validated route.
pub trait Personal {
    fn person(&self) -> &Person;

    fn person_mut(&mut self) -> &mut Person;

    fn name(&self) -> &str {
        self.person().name()
    }

    fn age(&self) -> u32 {
        self.person().age()
    }

    fn email(&self) -> &str {
        self.person().email()
    }

    /// # Errors
    /// `Validation` if `name` is blank.
    fn set_name(&mut self, name: &str) -> Result<()> {
        self.person_mut().set_name(name)
    }

    /// # Errors
    /// `Validation` if `age` is negative.
    fn set_age(&mut self, age: i64) -> Result<()> {
        self.person_mut().set_age(age)
    }

    /// # Errors
    /// `Validation` if `email` is malformed.
    fn set_email(&mut self, email: &str) -> Result<()> {
        self.person_mut().set_email(email)
    }

    /// # Errors
    /// `Validation` if any supplied field fails; nothing is changed then.
    fn apply_edit(&mut self, edit: &PersonEdit) -> Result<()> {
        let updated = self.person().edited(edit)?;
        *self.person_mut() = updated;
        Ok(())
    }

    fn introduce(&self) -> String {
        self.person().introduce()
    }
}
