//! Display names for round numbers

pub const FINAL: &str = "Final";
pub const SEMIFINALS: &str = "Semifinals";
pub const QUARTERFINALS: &str = "Quarterfinals";
pub const THIRD_PLACE_MATCH: &str = "Third Place Match";
pub const ROUND_ROBIN: &str = "Round Robin";

const ORDINAL_WORDS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
    "Tenth",
];

/// Name for every round number from 1 to the total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundNames {
    names: Vec<String>,
}

impl RoundNames {
    /// Names for an elimination draw of `total` rounds.
    ///
    /// The last three rounds are Final, Semifinals and Quarterfinals;
    /// earlier rounds are counted forward from "First Round".
    pub fn elimination(total: u32) -> Self {
        let names = (1..=total)
            .map(|round| match total - round {
                0 => FINAL.to_string(),
                1 => SEMIFINALS.to_string(),
                2 => QUARTERFINALS.to_string(),
                _ => format!("{} Round", ordinal(round)),
            })
            .collect();
        Self { names }
    }

    /// Fixed three-tier names for a round-robin tournament
    pub fn round_robin() -> Self {
        Self {
            names: vec![
                ROUND_ROBIN.to_string(),
                SEMIFINALS.to_string(),
                FINAL.to_string(),
            ],
        }
    }

    /// Name of `round` (1-based)
    pub fn name(&self, round: u32) -> Option<&str> {
        self.names
            .get(round.checked_sub(1)? as usize)
            .map(String::as_str)
    }

    pub fn total(&self) -> u32 {
        self.names.len() as u32
    }
}

fn ordinal(n: u32) -> String {
    if let Some(word) = ORDINAL_WORDS.get(n.wrapping_sub(1) as usize) {
        return word.to_string();
    }
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
