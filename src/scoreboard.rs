use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::debug;

use crate::data::DataClient;
use crate::error::Result;
use crate::game::Game;
use crate::model::RawGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    American,
    National,
}

impl League {
    pub fn code(self) -> char {
        match self {
            League::American => 'A',
            League::National => 'N',
        }
    }
}

impl FromStr for League {
    type Err = String;

    /// Only the first character counts: "nl", "National" and "n" are all National.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(League::American),
            Some('N') => Ok(League::National),
            _ => Err(format!("must select AL or NL, got {:?}", s)),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}L", self.code())
    }
}

/// Every game on one date, in feed order.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    date: NaiveDate,
    games: Vec<Game>,
}

impl Scoreboard {
    pub fn new(date: NaiveDate, games: Vec<Game>) -> Self {
        Self { date, games }
    }

    pub fn from_raw(date: NaiveDate, raw: Vec<RawGame>) -> Result<Self> {
        let games = raw
            .into_iter()
            .map(Game::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(date, games))
    }

    pub async fn fetch(client: &DataClient, date: NaiveDate) -> Result<Self> {
        let raw = client.fetch(date).await?;
        Self::from_raw(date, raw)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn games(&self) -> Vec<&Game> {
        self.games.iter().collect()
    }

    /// Interleague games show up under both leagues.
    pub fn games_by_league(&self, league: League) -> Vec<&Game> {
        let games: Vec<&Game> = self
            .games
            .iter()
            .filter(|g| g.in_league(league.code()))
            .collect();
        debug!("{} games in the {}", games.len(), league);
        games
    }

    /// Games involving any of `abbrevs` (case-insensitive). A game between two
    /// requested teams is listed once.
    pub fn games_by_team<S: AsRef<str>>(&self, abbrevs: &[S]) -> Vec<&Game> {
        let wanted: Vec<String> = abbrevs
            .iter()
            .map(|a| a.as_ref().trim().to_uppercase())
            .collect();
        let games: Vec<&Game> = self
            .games
            .iter()
            .filter(|g| wanted.iter().any(|abbrev| g.involves(abbrev)))
            .collect();
        debug!("{} games for {:?}", games.len(), wanted);
        games
    }

    pub fn games_in_progress(&self) -> Vec<&Game> {
        self.games.iter().filter(|g| g.is_in_progress()).collect()
    }
}
