//! The pet record and its status snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::mood::Mood;
use super::species::Species;

/// One pet: identity plus the two counters its mood is derived from.
///
/// Hunger and boredom are unsigned, so they can never be observed negative;
/// every signed write goes through a clamp at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetState {
    name: String,
    species: Species,
    hunger: u64,
    boredom: u64,
}

impl PetState {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self::with_levels(name, species, 0, 0)
    }

    /// Create a pet with initial hunger and boredom (clamped at zero).
    pub fn with_levels(name: impl Into<String>, species: Species, hunger: i64, boredom: i64) -> Self {
        let mut pet = Self {
            name: name.into(),
            species,
            hunger: 0,
            boredom: 0,
        };
        pet.set_hunger(hunger);
        pet.set_boredom(boredom);
        pet
    }

    /// The name exactly as given.
    pub fn raw_name(&self) -> &str {
        &self.name
    }

    /// The name in title case, as shown to players.
    pub fn name(&self) -> String {
        title_case(&self.name)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn hunger(&self) -> u64 {
        self.hunger
    }

    pub fn boredom(&self) -> u64 {
        self.boredom
    }

    pub fn set_hunger(&mut self, value: i64) {
        self.hunger = u64::try_from(value).unwrap_or(0);
    }

    pub fn set_boredom(&mut self, value: i64) {
        self.boredom = u64::try_from(value).unwrap_or(0);
    }

    /// Shift hunger by a signed delta, stopping at zero.
    pub fn adjust_hunger(&mut self, delta: i64) -> u64 {
        self.hunger = self.hunger.saturating_add_signed(delta);
        self.hunger
    }

    /// Shift boredom by a signed delta, stopping at zero.
    pub fn adjust_boredom(&mut self, delta: i64) -> u64 {
        self.boredom = self.boredom.saturating_add_signed(delta);
        self.boredom
    }

    pub(crate) fn relieve_hunger(&mut self, amount: u64) -> u64 {
        self.hunger = self.hunger.saturating_sub(amount);
        self.hunger
    }

    pub(crate) fn relieve_boredom(&mut self, amount: u64) -> u64 {
        self.boredom = self.boredom.saturating_sub(amount);
        self.boredom
    }

    pub(crate) fn worsen(&mut self, hunger: u64, boredom: u64) {
        self.hunger = self.hunger.saturating_add(hunger);
        self.boredom = self.boredom.saturating_add(boredom);
    }

    pub fn mood_factor(&self) -> u64 {
        self.hunger.saturating_add(self.boredom)
    }

    pub fn mood(&self) -> Mood {
        Mood::from_factor(self.mood_factor())
    }

    pub fn speak(&self) -> &'static str {
        self.species.speak()
    }

    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            name: self.name(),
            species: self.species,
            hunger: self.hunger,
            boredom: self.boredom,
            mood: self.mood(),
        }
    }
}

/// Point-in-time view of a pet for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub name: String,
    pub species: Species,
    pub hunger: u64,
    pub boredom: u64,
    pub mood: Mood,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nType: {}\nHunger: {}\nBoredom: {}\nMood: {}",
            self.name, self.species, self.hunger, self.boredom, self.mood
        )
    }
}

/// Capitalize each word, lower-casing the rest. Words already written
/// entirely in upper case are treated as acronyms and left alone.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            push_title_word(&mut out, &word);
            word.clear();
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    push_title_word(&mut out, &word);

    out
}

fn push_title_word(out: &mut String, word: &str) {
    let has_lower = word.chars().any(char::is_lowercase);
    let has_upper = word.chars().any(char::is_uppercase);
    if has_upper && !has_lower {
        out.push_str(word);
        return;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        for ch in chars {
            out.extend(ch.to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-100, 0)]
    #[case(-1, 0)]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(250, 250)]
    fn test_setters_clamp(#[case] value: i64, #[case] stored: u64) {
        let mut pet = PetState::new("rex", Species::Dog);
        pet.set_hunger(value);
        pet.set_boredom(value);
        assert_eq!(pet.hunger(), stored);
        assert_eq!(pet.boredom(), stored);
    }

    #[test]
    fn test_adjust_stops_at_zero() {
        let mut pet = PetState::with_levels("rex", Species::Dog, 3, 10);
        assert_eq!(pet.adjust_hunger(-5), 0);
        assert_eq!(pet.adjust_boredom(-4), 6);
        assert_eq!(pet.adjust_boredom(7), 13);
    }

    #[test]
    fn test_initial_levels_clamped() {
        let pet = PetState::with_levels("rex", Species::Dog, -8, 12);
        assert_eq!(pet.hunger(), 0);
        assert_eq!(pet.boredom(), 12);
        assert_eq!(pet.mood(), Mood::Content);
    }

    #[rstest]
    #[case("rex", "Rex")]
    #[case("mr whiskers", "Mr Whiskers")]
    #[case("sIR fluffington", "Sir Fluffington")]
    #[case("BB the bunny", "BB The Bunny")]
    #[case("", "")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[test]
    fn test_name_stored_as_given() {
        let pet = PetState::new("rex", Species::Dog);
        assert_eq!(pet.raw_name(), "rex");
        assert_eq!(pet.name(), "Rex");
    }

    #[test]
    fn test_status_report_format() {
        let pet = PetState::with_levels("rex", Species::Dog, 20, 30);
        let report = pet.status_report();
        assert_eq!(
            report.to_string(),
            "Name: Rex\nType: Dog\nHunger: 20\nBoredom: 30\nMood: Mad"
        );
        assert_eq!(report, pet.status_report());
    }
}
