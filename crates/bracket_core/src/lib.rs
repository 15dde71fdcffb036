//! Round inference for completed tournaments
//!
//! Match logs record who played whom and who won, but not the round. This
//! crate reconstructs the bracket of each tournament from win/loss counts
//! and the order of the matches, and labels every match with a round
//! number and name:
//! - single elimination, with or without byes and a third place match
//! - round-robin group stage followed by semifinals and a final
//!
//! # Usage
//!
//! ```
//! use bracket_core::{assign_rounds, MatchRecord};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
//! let mut matches = vec![
//!     MatchRecord::new("Open", date, "A", "B"),
//!     MatchRecord::new("Open", date, "C", "D"),
//!     MatchRecord::new("Open", date, "A", "C"),
//! ];
//! assign_rounds(&mut matches).unwrap();
//! assert_eq!(matches[2].round_name(), Some("Final"));
//! ```

mod bye_third_place;
mod bye_walker;
mod error;
mod last_rounds;
mod names;
mod placement;
mod record;
mod round_robin;
mod segment;
mod standard;
mod tally;
mod third_place;
mod topology;

pub use error::*;
pub use names::*;
pub use record::*;
pub use segment::*;
pub use tally::*;
pub use topology::*;
