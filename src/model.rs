use serde::{Deserialize, Serialize};

/// Top level of `master_scoreboard.json`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub data: Option<FeedData>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedData {
    pub games: Option<FeedGames>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedGames {
    /// Absent on days with nothing scheduled. A lone game arrives as an object, not an array.
    #[serde(default)]
    pub game: Option<OneOrMany<RawGame>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGame {
    pub away_team_name: Option<String>,
    pub away_name_abbrev: Option<String>,
    pub home_team_name: Option<String>,
    pub home_name_abbrev: Option<String>,
    pub league: Option<String>, // "AN", "AA", "NN"
    pub status: Option<RawStatus>,
    pub time: Option<String>,
    pub time_zone: Option<String>,
    pub linescore: Option<RawLinescore>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStatus {
    pub ind: Option<String>, // "S", "P", "I", "F", "O", "DR", ...
    pub status: Option<String>,
    pub inning: Option<String>,
    pub inning_state: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLinescore {
    pub r: Option<RawTotals>,
    pub h: Option<RawTotals>,
    pub e: Option<RawTotals>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTotals {
    pub away: Option<String>,
    pub home: Option<String>,
}
