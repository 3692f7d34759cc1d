use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Permanent (adult) or primary (deciduous) tooth set.
///
/// Determines which FDI numbers are valid for a chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dentition {
    #[default]
    Permanent,
    Primary,
}

impl Dentition {
    /// Quadrant digits in chart order: upper right, upper left, lower right,
    /// lower left.
    fn quadrants(self) -> [u8; 4] {
        match self {
            Dentition::Permanent => [1, 2, 4, 3],
            Dentition::Primary => [5, 6, 8, 7],
        }
    }

    /// Highest position digit in a quadrant (8 permanent, 5 primary).
    fn positions(self) -> u8 {
        match self {
            Dentition::Permanent => 8,
            Dentition::Primary => 5,
        }
    }

    /// Whether `number` is a tooth of this dentition.
    pub fn contains(self, number: u8) -> bool {
        let quadrant = number / 10;
        let position = number % 10;
        self.quadrants().contains(&quadrant) && (1..=self.positions()).contains(&position)
    }

    /// Every tooth of this dentition in odontogram order:
    /// `18..11, 21..28, 48..41, 31..38` for permanent teeth and
    /// `55..51, 61..65, 85..81, 71..75` for primary teeth.
    pub fn teeth(self) -> Vec<ToothNumber> {
        let max = self.positions();
        let mut teeth = Vec::with_capacity(usize::from(max) * 4);
        for quadrant in self.quadrants() {
            // Patient's right side is read from the back molar towards the midline.
            let right_side = matches!(quadrant, 1 | 4 | 5 | 8);
            let positions: Vec<u8> = if right_side {
                (1..=max).rev().collect()
            } else {
                (1..=max).collect()
            };
            teeth.extend(
                positions
                    .into_iter()
                    .map(|position| ToothNumber(quadrant * 10 + position)),
            );
        }
        teeth
    }
}

/// An FDI two-digit tooth number: quadrant digit followed by position digit.
///
/// Construction only succeeds for numbers that exist in either dentition;
/// whether a number is valid for the *active* chart is a vocabulary concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "i32", into = "i32")]
#[ts(export)]
pub struct ToothNumber(u8);

impl ToothNumber {
    pub fn new(number: i32) -> Result<Self, CoreError> {
        u8::try_from(number)
            .ok()
            .filter(|n| Dentition::Permanent.contains(*n) || Dentition::Primary.contains(*n))
            .map(ToothNumber)
            .ok_or(CoreError::InvalidToothNumber(number))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn quadrant(self) -> u8 {
        self.0 / 10
    }

    pub fn position(self) -> u8 {
        self.0 % 10
    }

    pub fn dentition(self) -> Dentition {
        if Dentition::Permanent.contains(self.0) {
            Dentition::Permanent
        } else {
            Dentition::Primary
        }
    }
}

impl TryFrom<i32> for ToothNumber {
    type Error = CoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ToothNumber> for i32 {
    fn from(tooth: ToothNumber) -> Self {
        i32::from(tooth.0)
    }
}

impl fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
