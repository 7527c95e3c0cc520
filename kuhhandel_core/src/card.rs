use itertools::Itertools;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Display, EnumIter, EnumString, EnumMessage)]
#[strum(serialize_all = "lowercase")]
pub enum Animal {
    Rooster,
    Duck,
    Cat,
    Dog,
    Sheep,
    Goat,
    #[strum(
        message = "Every time a donkey is flipped for auction each player receives an extra money card."
    )]
    Donkey,
    Pig,
    Cow,
    Horse,
}

impl Animal {
    pub fn list() -> String {
        Animal::iter().map(|a| a.describe()).join("\n")
    }

    pub fn value(&self) -> u32 {
        match self {
            Animal::Rooster => 10,
            Animal::Duck => 40,
            Animal::Cat => 90,
            Animal::Dog => 160,
            Animal::Sheep => 250,
            Animal::Goat => 350,
            Animal::Donkey => 500,
            Animal::Pig => 650,
            Animal::Cow => 800,
            Animal::Horse => 1000,
        }
    }

    pub fn describe(&self) -> String {
        match self.get_message() {
            Some(note) => format!("{} [value = {}]: {}", self, self.value(), note),
            None => format!("{} [value = {}]", self, self.value()),
        }
    }
}
