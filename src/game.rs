use std::collections::BTreeSet;
use std::fmt;

use crate::error::Error;
use crate::model::{RawGame, RawLinescore, RawTotals};

pub const IN_PROGRESS: &str = "In Progress";

const BOARD_WIDTH: usize = 28;
const NAME_WIDTH: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub abbrev: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    /// Single-letter-ish code from the feed: "S", "P", "I", "F", "O", "DR"...
    pub indicator: String,
    /// Human readable sub-status, e.g. "In Progress", "Final", "Postponed".
    pub detail: String,
    pub inning: Option<String>,
    pub inning_state: Option<String>,
}

impl GameStatus {
    pub fn is_postponed_or_cancelled(&self) -> bool {
        matches!(self.detail.as_str(), "Postponed" | "Cancelled")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub away: String,
    pub home: String,
}

/// Runs, hits and errors for both sides. Only built when all six are present.
#[derive(Debug, Clone, PartialEq)]
pub struct Linescore {
    pub runs: Totals,
    pub hits: Totals,
    pub errors: Totals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    away: Team,
    home: Team,
    leagues: BTreeSet<char>,
    status: GameStatus,
    start_time: String,
    time_zone: String,
    linescore: Option<Linescore>,
}

impl Game {
    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn in_league(&self, code: char) -> bool {
        self.leagues.contains(&code)
    }

    pub fn involves(&self, abbrev: &str) -> bool {
        self.away.abbrev == abbrev || self.home.abbrev == abbrev
    }

    pub fn is_in_progress(&self) -> bool {
        self.status.detail == IN_PROGRESS
    }

    fn status_line(&self) -> String {
        let status = &self.status;
        match status.indicator.as_str() {
            "I" => format!(
                "{} {}",
                status.inning_state.as_deref().unwrap_or_default(),
                status.inning.as_deref().unwrap_or_default()
            ),
            "P" | "S" => format!("{} {}", self.start_time, self.time_zone),
            other => other.to_string(),
        }
    }

    /// Renders the five-line scoreboard box, away team on top.
    pub fn render(&self) -> String {
        let zero = Totals {
            away: "0".to_string(),
            home: "0".to_string(),
        };
        let (runs, hits, errors) = match &self.linescore {
            Some(ls) => (&ls.runs, &ls.hits, &ls.errors),
            None => (&zero, &zero, &zero),
        };

        let blank = self.status.is_postponed_or_cancelled();
        let away_runs = if blank { "" } else { runs.away.as_str() };
        let home_runs = if blank { "" } else { runs.home.as_str() };

        let away_row = row(&self.away.name, away_runs, &hits.away, &errors.away);
        let home_row = row(&self.home.name, home_runs, &hits.home, &errors.home);

        [
            format!("  {}", "_".repeat(BOARD_WIDTH)),
            format!(" {}   {}", away_row, self.status_line()),
            format!(" |{}|", "-".repeat(BOARD_WIDTH)),
            format!(" {}", home_row),
            format!("  {}", "‾".repeat(BOARD_WIDTH)),
        ]
        .join("\n")
    }
}

fn row(name: &str, runs: &str, hits: &str, errors: &str) -> String {
    format!(
        "| {:<width$}| {:>3}| {:>3}| {:>3}|",
        name,
        runs,
        hits,
        errors,
        width = NAME_WIDTH
    )
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, Error> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::missing_field(field))
}

fn totals(raw: Option<RawTotals>) -> Option<Totals> {
    let raw = raw?;
    Some(Totals {
        away: raw.away?,
        home: raw.home?,
    })
}

fn linescore(raw: RawLinescore) -> Option<Linescore> {
    Some(Linescore {
        runs: totals(raw.r)?,
        hits: totals(raw.h)?,
        errors: totals(raw.e)?,
    })
}

impl TryFrom<RawGame> for Game {
    type Error = Error;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let away = Team {
            name: required(raw.away_team_name, "away_team_name")?,
            abbrev: required(raw.away_name_abbrev, "away_name_abbrev")?.to_uppercase(),
        };
        let home = Team {
            name: required(raw.home_team_name, "home_team_name")?,
            abbrev: required(raw.home_name_abbrev, "home_name_abbrev")?.to_uppercase(),
        };

        let leagues: BTreeSet<char> = required(raw.league, "league")?
            .trim()
            .chars()
            .flat_map(char::to_uppercase)
            .collect();

        let raw_status = raw.status.ok_or_else(|| Error::missing_field("status"))?;
        let status = GameStatus {
            indicator: required(raw_status.ind, "status.ind")?,
            detail: raw_status.status.unwrap_or_default(),
            inning: raw_status.inning,
            inning_state: raw_status.inning_state,
        };

        Ok(Game {
            away,
            home,
            leagues,
            status,
            start_time: raw.time.unwrap_or_default(),
            time_zone: raw.time_zone.unwrap_or_default(),
            linescore: raw.linescore.and_then(linescore),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawStatus;

    fn totals(away: &str, home: &str) -> Option<RawTotals> {
        Some(RawTotals {
            away: Some(away.to_string()),
            home: Some(home.to_string()),
        })
    }

    fn raw_game(ind: &str, detail: &str) -> RawGame {
        RawGame {
            away_team_name: Some("Yankees".to_string()),
            away_name_abbrev: Some("NYY".to_string()),
            home_team_name: Some("Red Sox".to_string()),
            home_name_abbrev: Some("BOS".to_string()),
            league: Some("AA".to_string()),
            status: Some(RawStatus {
                ind: Some(ind.to_string()),
                status: Some(detail.to_string()),
                inning: None,
                inning_state: None,
            }),
            time: Some("7:10".to_string()),
            time_zone: Some("ET".to_string()),
            linescore: None,
        }
    }

    fn with_linescore(mut raw: RawGame) -> RawGame {
        raw.linescore = Some(RawLinescore {
            r: totals("5", "3"),
            h: totals("8", "6"),
            e: totals("1", "0"),
        });
        raw
    }

    fn game(raw: RawGame) -> Game {
        Game::try_from(raw).expect("valid game")
    }

    #[test]
    fn test_render_is_five_lines_with_full_borders() {
        let board = game(with_linescore(raw_game("F", "Final"))).render();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].chars().filter(|c| *c == '_').count(), 28);
        assert_eq!(lines[2].chars().filter(|c| *c == '-').count(), 28);
        assert_eq!(lines[4].chars().filter(|c| *c == '‾').count(), 28);
        assert_eq!(lines[2].chars().count(), 31);
        assert_eq!(lines[3].chars().count(), 31);
    }

    #[test]
    fn test_render_box_is_indented_one_column() {
        let board = game(with_linescore(raw_game("F", "Final"))).render();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], format!("  {}", "_".repeat(28)));
        assert_eq!(lines[2], format!(" |{}|", "-".repeat(28)));
        assert_eq!(lines[4], format!("  {}", "‾".repeat(28)));
        assert!(lines[1].starts_with(" | "));
        assert!(lines[3].starts_with(" | "));
    }

    #[test]
    fn test_render_final_game() {
        let board = game(with_linescore(raw_game("F", "Final"))).render();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], " | Yankees     |   5|   8|   1|   F");
        assert_eq!(lines[3], " | Red Sox     |   3|   6|   0|");
    }

    #[test]
    fn test_postponed_blanks_runs_only() {
        let board = game(with_linescore(raw_game("DR", "Postponed"))).render();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], " | Yankees     |    |   8|   1|   DR");
        assert_eq!(lines[3], " | Red Sox     |    |   6|   0|");
    }

    #[test]
    fn test_cancelled_without_linescore() {
        let board = game(raw_game("C", "Cancelled")).render();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], " | Yankees     |    |   0|   0|   C");
    }

    #[test]
    fn test_scheduled_without_linescore_shows_zeros_and_start_time() {
        let board = game(raw_game("S", "Scheduled")).render();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], " | Yankees     |   0|   0|   0|   7:10 ET");
        assert_eq!(lines[3], " | Red Sox     |   0|   0|   0|");
    }

    #[test]
    fn test_pre_game_shows_start_time() {
        let g = game(raw_game("P", "Pre-Game"));
        assert!(g.render().lines().nth(1).unwrap().ends_with("   7:10 ET"));
    }

    #[test]
    fn test_in_progress_shows_inning() {
        let mut raw = with_linescore(raw_game("I", IN_PROGRESS));
        if let Some(status) = raw.status.as_mut() {
            status.inning = Some("7".to_string());
            status.inning_state = Some("Top".to_string());
        }
        let g = game(raw);
        assert!(g.is_in_progress());
        assert!(g.render().lines().nth(1).unwrap().ends_with("   Top 7"));
    }

    #[test]
    fn test_partial_linescore_is_dropped() {
        let mut raw = with_linescore(raw_game("F", "Final"));
        if let Some(ls) = raw.linescore.as_mut() {
            ls.e = None;
        }
        let g = game(raw);
        assert!(g.linescore.is_none());
        assert_eq!(g.render().lines().nth(1).unwrap(), " | Yankees     |   0|   0|   0|   F");
    }

    #[test]
    fn test_leagues_are_a_set() {
        let mut raw = raw_game("S", "Scheduled");
        raw.league = Some("an".to_string());
        let g = game(raw);
        assert!(g.in_league('A'));
        assert!(g.in_league('N'));
        assert_eq!(g.leagues.len(), 2);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let mut raw = raw_game("S", "Scheduled");
        raw.home_name_abbrev = None;
        let err = Game::try_from(raw).unwrap_err();
        assert!(matches!(err, Error::MalformedFeed(ref msg) if msg.contains("home_name_abbrev")));

        let mut raw = raw_game("S", "Scheduled");
        raw.league = Some(String::new());
        assert!(matches!(Game::try_from(raw), Err(Error::MalformedFeed(_))));

        let mut raw = raw_game("S", "Scheduled");
        raw.status = None;
        assert!(matches!(Game::try_from(raw), Err(Error::MalformedFeed(_))));
    }
}
