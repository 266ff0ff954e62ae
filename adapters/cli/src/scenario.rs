use std::{error::Error, fmt, fs, path::Path, str::FromStr};

use anyhow::{Context, Result};
use path_defence_core::{Catalog, Command, LevelConfig, MapDefinition, TowerKindId, Vec2};
use serde::Deserialize;

const DEMO_SCENARIO: &str = include_str!("../scenarios/demo.json");

/// Everything needed to start a level: starting values, static tables and the map.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct Scenario {
    /// Starting values; the stock defaults apply when omitted.
    #[serde(default)]
    pub(crate) config: LevelConfig,
    /// Enemy and tower tables.
    pub(crate) catalog: Catalog,
    /// Path and wave schedule.
    pub(crate) map: MapDefinition,
}

impl Scenario {
    /// Reads a scenario from a JSON file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed reading scenario {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid scenario {}", path.display()))
    }

    /// Scenario bundled with the binary.
    pub(crate) fn demo() -> Result<Self> {
        Self::parse(DEMO_SCENARIO).context("bundled demo scenario is invalid")
    }

    fn parse(contents: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(contents)?;
        if scenario.map.path.len() < 2 {
            anyhow::bail!("the map path needs at least two points");
        }
        Ok(scenario)
    }
}

/// Tower placement requested on the command line as `KIND@X,Y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Placement {
    pub(crate) kind: TowerKindId,
    pub(crate) position: Vec2,
}

impl Placement {
    pub(crate) fn command(self) -> Command {
        Command::PlaceTower {
            kind: self.kind,
            position: self.position,
        }
    }
}

impl FromStr for Placement {
    type Err = PlacementArgError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (kind, position) = trimmed
            .split_once('@')
            .ok_or_else(|| PlacementArgError::MissingPosition(trimmed.to_owned()))?;
        let kind = kind
            .trim()
            .parse::<u32>()
            .map_err(|_| PlacementArgError::InvalidKind(kind.to_owned()))?;

        let (x, y) = position
            .split_once(',')
            .ok_or_else(|| PlacementArgError::InvalidPosition(position.to_owned()))?;
        let x = parse_coordinate(x, position)?;
        let y = parse_coordinate(y, position)?;

        Ok(Self {
            kind: TowerKindId::new(kind),
            position: Vec2::new(x, y),
        })
    }
}

fn parse_coordinate(value: &str, position: &str) -> Result<f32, PlacementArgError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
        .ok_or_else(|| PlacementArgError::InvalidPosition(position.to_owned()))
}

/// Errors raised while parsing a `KIND@X,Y` placement argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlacementArgError {
    /// The argument has no `@` separating kind and position.
    MissingPosition(String),
    /// The kind is not an unsigned integer.
    InvalidKind(String),
    /// The position is not a pair of finite numbers.
    InvalidPosition(String),
}

impl fmt::Display for PlacementArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPosition(value) => {
                write!(f, "placement '{value}' must look like KIND@X,Y")
            }
            Self::InvalidKind(kind) => write!(f, "tower kind '{kind}' is not a number"),
            Self::InvalidPosition(position) => {
                write!(f, "could not parse position '{position}' as X,Y")
            }
        }
    }
}

impl Error for PlacementArgError {}
