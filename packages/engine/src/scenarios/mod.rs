//! Scenario Loader
//!
//! A scenario is a one-shot layout: clear the grid, then a bounded series of
//! clipped `fill`/`set` calls. Shapes are fixed relative to the grid size;
//! only the details called out in each builder are randomized.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SimError;
use crate::grid::Grid;
use crate::systems::random::RandomSource;

mod layouts;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    Volcano,
    Hazard,
    Splash,
    Fuse,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Volcano,
        Scenario::Hazard,
        Scenario::Splash,
        Scenario::Fuse,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Scenario::Volcano => "Volcano",
            Scenario::Hazard => "Hazard",
            Scenario::Splash => "Splash",
            Scenario::Fuse => "Fuse",
        }
    }

    /// Clear `grid` and build this layout on it.
    pub fn load(self, grid: &mut Grid, rng: &mut dyn RandomSource) {
        grid.clear();
        match self {
            Scenario::Volcano => layouts::volcano(grid, rng),
            Scenario::Hazard => layouts::hazard(grid),
            Scenario::Splash => layouts::splash(grid),
            Scenario::Fuse => layouts::fuse(grid),
        }
    }
}

impl FromStr for Scenario {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Scenario::ALL
            .iter()
            .copied()
            .find(|sc| sc.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn scenario_names() -> Vec<&'static str> {
    Scenario::ALL.iter().map(|s| s.name()).collect()
}
