use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The seven money card values a payment can be composed of.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Denomination {
    Zeros,
    Tens,
    Twenties,
    Fifties,
    Hundreds,
    Twohundreds,
    Fivehundreds,
}

impl Denomination {
    pub fn value(&self) -> u64 {
        match self {
            Denomination::Zeros => 0,
            Denomination::Tens => 10,
            Denomination::Twenties => 20,
            Denomination::Fifties => 50,
            Denomination::Hundreds => 100,
            Denomination::Twohundreds => 200,
            Denomination::Fivehundreds => 500,
        }
    }
}

/// Number of money cards tendered at each denomination.
///
/// Serializes as the `payment` payload. Sufficiency against a price is
/// decided by the server.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationCounts {
    pub zeros: u32,
    pub tens: u32,
    pub twenties: u32,
    pub fifties: u32,
    pub hundreds: u32,
    pub twohundreds: u32,
    pub fivehundreds: u32,
}

impl DenominationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        self.set(denomination, count);
        self
    }

    pub fn get(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Zeros => self.zeros,
            Denomination::Tens => self.tens,
            Denomination::Twenties => self.twenties,
            Denomination::Fifties => self.fifties,
            Denomination::Hundreds => self.hundreds,
            Denomination::Twohundreds => self.twohundreds,
            Denomination::Fivehundreds => self.fivehundreds,
        }
    }

    pub fn set(&mut self, denomination: Denomination, count: u32) {
        let slot = match denomination {
            Denomination::Zeros => &mut self.zeros,
            Denomination::Tens => &mut self.tens,
            Denomination::Twenties => &mut self.twenties,
            Denomination::Fifties => &mut self.fifties,
            Denomination::Hundreds => &mut self.hundreds,
            Denomination::Twohundreds => &mut self.twohundreds,
            Denomination::Fivehundreds => &mut self.fivehundreds,
        };
        *slot = count;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        Denomination::iter().map(move |d| (d, self.get(d)))
    }

    /// Value of the tendered cards.
    pub fn total(&self) -> u64 {
        self.iter().map(|(d, n)| d.value() * u64::from(n)).sum()
    }

    /// Number of money cards tendered, zeros included.
    pub fn count(&self) -> u64 {
        self.iter().map(|(_, n)| u64::from(n)).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::payment::{Denomination, DenominationCounts};

    #[test]
    fn total_should_sum_count_times_value() {
        let counts = DenominationCounts::new()
            .with(Denomination::Zeros, 2)
            .with(Denomination::Tens, 3)
            .with(Denomination::Fifties, 1)
            .with(Denomination::Fivehundreds, 2);

        assert_eq!(counts.total(), 30 + 50 + 1000);
    }

    #[test]
    fn count_should_include_zero_cards() {
        let counts = DenominationCounts::new()
            .with(Denomination::Zeros, 2)
            .with(Denomination::Twenties, 1);

        assert_eq!(counts.count(), 3);
        assert_eq!(counts.total(), 20);
    }

    #[test]
    fn set_should_only_touch_one_denomination() {
        let mut counts = DenominationCounts::new();
        counts.set(Denomination::Twohundreds, 4);

        assert_eq!(counts.get(Denomination::Twohundreds), 4);
        assert_eq!(counts.iter().filter(|&(_, n)| n > 0).count(), 1);
    }

    #[test]
    fn payload_should_use_the_seven_wire_field_names() {
        let counts = DenominationCounts::new().with(Denomination::Hundreds, 1);
        let json = serde_json::to_value(counts).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "zeros": 0,
                "tens": 0,
                "twenties": 0,
                "fifties": 0,
                "hundreds": 1,
                "twohundreds": 0,
                "fivehundreds": 0
            })
        );
    }

    #[test]
    fn denomination_names_should_match_payload_fields() {
        let counts = DenominationCounts::new().with(Denomination::Tens, 7);
        let json = serde_json::to_value(counts).unwrap();
        for (denomination, count) in counts.iter() {
            assert_eq!(json[denomination.to_string()], count);
        }
    }
}
