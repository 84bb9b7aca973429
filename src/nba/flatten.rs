//! Flattening of nested team standings into `top_teams` rows.
//!
//! The row layout is declared once in [`TOP_TEAMS_COLUMNS`]: each column names
//! the nested group and key it comes from, its SQL type, and a typed extractor.
//! Nothing is inferred from whatever keys a payload happens to carry, so every
//! record has the same cells in the same order.

use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::nba::types::TeamStanding;


/// Nested group a column is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Team,
    Conference,
    Division,
    Win,
    Loss,
    Streak,
}

impl Group {
    pub const ALL: [Group; 6] = [
        Group::Team,
        Group::Conference,
        Group::Division,
        Group::Win,
        Group::Loss,
        Group::Streak,
    ];

    /// Prefix used for `<Prefix>_<Key>` column names.
    pub fn prefix(&self) -> &'static str {
        match self {
            Group::Team => "Team",
            Group::Conference => "Conference",
            Group::Division => "Division",
            Group::Win => "Win",
            Group::Loss => "Loss",
            Group::Streak => "Streak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Integer,
    Boolean,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Boolean => "BOOLEAN",
        }
    }
}

/// One cell of a flat record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Null,
}

impl CellValue {
    /// Whether this cell can be bound to a column of `sql_type`.
    pub fn fits(&self, sql_type: SqlType, nullable: bool) -> bool {
        match (self, sql_type) {
            (CellValue::Null, _) => nullable,
            (CellValue::Text(_), SqlType::Text) => true,
            (CellValue::Integer(_), SqlType::Integer) => true,
            (CellValue::Boolean(_), SqlType::Boolean) => true,
            _ => false,
        }
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Integer(i64::from(v))
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Boolean(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<Option<&str>> for CellValue {
    fn from(v: Option<&str>) -> Self {
        v.map_or(CellValue::Null, CellValue::from)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Null => write!(f, "NULL"),
        }
    }
}

/// A `top_teams` column and where its value comes from.
pub struct Column {
    pub name: &'static str,
    pub group: Group,
    /// Key inside the group, as spelled in the API payload.
    pub key: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    extract: fn(&TeamStanding) -> CellValue,
}

impl Column {
    pub fn extract(&self, team: &TeamStanding) -> CellValue {
        (self.extract)(team)
    }

    /// Columns named `<Prefix>_<Key>`; the rest are convenience aliases.
    pub fn is_prefixed(&self) -> bool {
        self.name
            .strip_prefix(self.group.prefix())
            .is_some_and(|rest| rest.starts_with('_'))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("key", &self.key)
            .field("sql_type", &self.sql_type)
            .field("nullable", &self.nullable)
            .finish()
    }
}

const fn col(
    name: &'static str,
    group: Group,
    key: &'static str,
    sql_type: SqlType,
    extract: fn(&TeamStanding) -> CellValue,
) -> Column {
    Column {
        name,
        group,
        key,
        sql_type,
        nullable: false,
        extract,
    }
}

const fn nullable(column: Column) -> Column {
    Column {
        nullable: true,
        ..column
    }
}

use Group::*;
use SqlType::*;

/// Row layout of the `top_teams` table, in insertion order.
pub static TOP_TEAMS_COLUMNS: [Column; 24] = [
    col("Team_Name", Team, "name", Text, |t| t.team.name.as_str().into()),
    col("Conference", Conference, "name", Text, |t| t.conference.name.as_str().into()),
    col("Rank", Conference, "rank", Integer, |t| t.conference.rank.into()),
    col("Total_Wins", Win, "total", Integer, |t| t.win.total.into()),
    col("Total_Losses", Loss, "total", Integer, |t| t.loss.total.into()),
    col("Division_Name", Division, "name", Text, |t| t.division.name.as_str().into()),
    col("Division_Rank", Division, "rank", Integer, |t| t.division.rank.into()),
    col("Division_Win", Division, "win", Integer, |t| t.division.win.into()),
    col("Division_Loss", Division, "loss", Integer, |t| t.division.loss.into()),
    nullable(col("Division_GamesBehind", Division, "gamesBehind", Text, |t| {
        t.division.games_behind.as_deref().into()
    })),
    col("Win_Home", Win, "home", Integer, |t| t.win.home.into()),
    col("Win_Away", Win, "away", Integer, |t| t.win.away.into()),
    col("Win_Total", Win, "total", Integer, |t| t.win.total.into()),
    col("Win_Percentage", Win, "percentage", Text, |t| t.win.percentage.as_str().into()),
    col("Win_LastTen", Win, "lastTen", Integer, |t| t.win.last_ten.into()),
    col("Loss_Home", Loss, "home", Integer, |t| t.loss.home.into()),
    col("Loss_Away", Loss, "away", Integer, |t| t.loss.away.into()),
    col("Loss_Total", Loss, "total", Integer, |t| t.loss.total.into()),
    col("Loss_Percentage", Loss, "percentage", Text, |t| t.loss.percentage.as_str().into()),
    col("Loss_LastTen", Loss, "lastTen", Integer, |t| t.loss.last_ten.into()),
    col("Streak_CurrentStreak", Streak, "streak", Integer, |t| t.streak.current.into()),
    col("Streak_WinningStreak", Streak, "winStreak", Boolean, |t| t.streak.winning.into()),
    nullable(col("Streak_TieBreakerPoints", Streak, "tieBreakerPoints", Text, |t| {
        t.streak.tie_breaker_points.as_deref().into()
    })),
    nullable(col("Logo", Team, "logo", Text, |t| t.team.logo.as_deref().into())),
];

/// Look a column up by name.
pub fn column(name: &str) -> Option<&'static Column> {
    TOP_TEAMS_COLUMNS.iter().find(|c| c.name == name)
}

/// One `top_teams` row: a cell per entry of [`TOP_TEAMS_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    cells: Vec<CellValue>,
}

impl FlatRecord {
    pub fn from_team(team: &TeamStanding) -> Self {
        Self {
            cells: TOP_TEAMS_COLUMNS.iter().map(|c| c.extract(team)).collect(),
        }
    }

    /// Wrap raw cells, e.g. rows read back from the database. No checks here;
    /// the store validates cells against the column list before binding.
    pub fn from_cells(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        let idx = TOP_TEAMS_COLUMNS.iter().position(|c| c.name == name)?;
        self.cells.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static Column, &CellValue)> + '_ {
        TOP_TEAMS_COLUMNS.iter().zip(self.cells.iter())
    }

    /// Re-nest one group: source key to cell value.
    pub fn group(&self, group: Group) -> BTreeMap<&'static str, &CellValue> {
        self.iter()
            .filter(|(c, _)| c.group == group)
            .map(|(c, v)| (c.key, v))
            .collect()
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column.name, value)?;
        }
        map.end()
    }
}

/// Flatten teams into rows, preserving order.
pub fn flatten<'a>(teams: impl IntoIterator<Item = &'a TeamStanding>) -> Vec<FlatRecord> {
    teams.into_iter().map(FlatRecord::from_team).collect()
}
