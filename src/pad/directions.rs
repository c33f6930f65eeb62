//! Direction flags and axis queries for pad controls.
//!
//! A [`DirectionSet`] says which of the four cardinal directions a pad
//! responds to. Everything else about a pad's configuration is derived from
//! it: which axes move, whether an axis is centered (bidirectional), anchored
//! to one edge (unidirectional) or frozen (nondirectional).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Set of cardinal directions a pad responds to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DirectionSet: u8 {
        const UP    = 1 << 0;
        const LEFT  = 1 << 1;
        const DOWN  = 1 << 2;
        const RIGHT = 1 << 3;

        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        const ALL = Self::UP.bits() | Self::LEFT.bits() | Self::DOWN.bits() | Self::RIGHT.bits();
    }
}

/// A single cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

/// Screen axis. X grows to the right, Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// How a direction set behaves along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Neither direction of the axis is present
    Nondirectional,
    /// Only the low end (Up or Left) is present
    LowOnly,
    /// Only the high end (Down or Right) is present
    HighOnly,
    /// Both directions are present
    Bidirectional,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Axis this direction points along
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }

    /// Up and Left sit at the low end of their axis
    pub fn is_low(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => DirectionSet::UP,
            Direction::Left => DirectionSet::LEFT,
            Direction::Down => DirectionSet::DOWN,
            Direction::Right => DirectionSet::RIGHT,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let arrow = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        write!(f, "{}", arrow)
    }
}

impl Axis {
    /// The (low, high) directions of this axis
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::X => (Direction::Left, Direction::Right),
            Axis::Y => (Direction::Up, Direction::Down),
        }
    }

    fn flags(self) -> (DirectionSet, DirectionSet) {
        let (low, high) = self.directions();
        (low.into(), high.into())
    }
}

impl DirectionSet {
    /// Axis this set moves along.
    ///
    /// Any horizontal direction wins over vertical ones, so an omnidirectional
    /// set reports `X`. Sets without directions have no axis.
    pub fn axis(&self) -> Option<Axis> {
        if self.intersects(DirectionSet::HORIZONTAL) {
            Some(Axis::X)
        } else if self.intersects(DirectionSet::VERTICAL) {
            Some(Axis::Y)
        } else {
            None
        }
    }

    /// Both ends of `axis` are present
    pub fn bidirectional(&self, axis: Axis) -> bool {
        let (low, high) = axis.flags();
        self.contains(low) && self.contains(high)
    }

    pub fn nondirectional(&self, axis: Axis) -> bool {
        let (low, high) = axis.flags();
        !self.contains(low) && !self.contains(high)
    }

    pub fn unidirectional(&self, axis: Axis) -> bool {
        !self.bidirectional(axis) && !self.nondirectional(axis)
    }

    /// Collapses the three axis queries into one value; exactly one holds
    pub fn mode(&self, axis: Axis) -> AxisMode {
        let (low, high) = axis.flags();
        match (self.contains(low), self.contains(high)) {
            (false, false) => AxisMode::Nondirectional,
            (true, false) => AxisMode::LowOnly,
            (false, true) => AxisMode::HighOnly,
            (true, true) => AxisMode::Bidirectional,
        }
    }

    pub fn contains_direction(&self, direction: Direction) -> bool {
        self.contains(direction.into())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::empty(), |set, d| set | d.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_axis_mode_holds_for_every_set() {
        for bits in 0..=DirectionSet::ALL.bits() {
            let set = DirectionSet::from_bits_truncate(bits);
            for axis in [Axis::X, Axis::Y] {
                let held = [
                    set.bidirectional(axis),
                    set.unidirectional(axis),
                    set.nondirectional(axis),
                ]
                .iter()
                .filter(|held| **held)
                .count();
                assert_eq!(held, 1, "set {:?} on {:?}", set, axis);
            }
        }
    }

    #[test]
    fn axis_prefers_horizontal_and_empty_has_none() {
        assert_eq!(DirectionSet::ALL.axis(), Some(Axis::X));
        assert_eq!(DirectionSet::DOWN.axis(), Some(Axis::Y));
        assert_eq!((DirectionSet::UP | DirectionSet::RIGHT).axis(), Some(Axis::X));
        assert_eq!(DirectionSet::empty().axis(), None);
    }

    #[test]
    fn all_is_union_of_the_four_directions() {
        let union: DirectionSet = Direction::ALL.into_iter().collect();
        assert_eq!(union, DirectionSet::ALL);
        assert_eq!(DirectionSet::HORIZONTAL | DirectionSet::VERTICAL, DirectionSet::ALL);
    }

    #[test]
    fn mode_matches_flag_queries() {
        assert_eq!(DirectionSet::LEFT.mode(Axis::X), AxisMode::LowOnly);
        assert_eq!(DirectionSet::RIGHT.mode(Axis::X), AxisMode::HighOnly);
        assert_eq!(DirectionSet::VERTICAL.mode(Axis::Y), AxisMode::Bidirectional);
        assert_eq!(DirectionSet::VERTICAL.mode(Axis::X), AxisMode::Nondirectional);
        assert!(DirectionSet::LEFT.unidirectional(Axis::X));
        assert!(DirectionSet::LEFT.nondirectional(Axis::Y));
    }

    #[test]
    fn directions_round_trip_through_toml_text() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            directions: DirectionSet,
        }

        let text = toml::to_string(&Wrapper {
            directions: DirectionSet::UP | DirectionSet::DOWN,
        })
        .expect("serialize");
        let parsed: Wrapper = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.directions, DirectionSet::VERTICAL);
    }
}
