use core::fmt;
use core::str::FromStr;

use anyhow::{Context, anyhow, bail};
use sweeper_core::{Action, Coord, Coord2};

/// One scripted player input, written `L<x>,<y>`, `R<x>,<y>`, `reset` or `tick`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Left(Coord2),
    Right(Coord2),
    Reset,
    Tick,
}

impl Move {
    pub fn action(self) -> Action {
        match self {
            Self::Left(coords) => Action::Reveal(coords),
            Self::Right(coords) => Action::CycleMark(coords),
            Self::Reset => Action::Reset,
            Self::Tick => Action::Tick,
        }
    }
}

fn parse_coords(text: &str) -> anyhow::Result<Coord2> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got {text:?}"))?;
    let x: Coord = x.trim().parse().with_context(|| format!("bad x in {text:?}"))?;
    let y: Coord = y.trim().parse().with_context(|| format!("bad y in {text:?}"))?;
    Ok((x, y))
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("reset") {
            return Ok(Self::Reset);
        }
        if text.eq_ignore_ascii_case("tick") {
            return Ok(Self::Tick);
        }

        let mut chars = text.chars();
        match chars.next() {
            Some('L' | 'l') => Ok(Self::Left(parse_coords(chars.as_str())?)),
            Some('R' | 'r') => Ok(Self::Right(parse_coords(chars.as_str())?)),
            _ => bail!("unknown move {text:?}, expected L<x>,<y>, R<x>,<y>, reset or tick"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left((x, y)) => write!(f, "L{x},{y}"),
            Self::Right((x, y)) => write!(f, "R{x},{y}"),
            Self::Reset => f.write_str("reset"),
            Self::Tick => f.write_str("tick"),
        }
    }
}
