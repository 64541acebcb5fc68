use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::cities::CITIES;

/// One `city;value` line. The value is kept as its parts so rendering never
/// goes through a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    city: &'static str,
    negative: bool,
    magnitude: u8,
    fraction: u8,
}

impl Record {
    /// Draws city, sign, magnitude and fraction, in that order.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let city = CITIES[rng.random_range(0..CITIES.len())];
        let negative = rng.random_range(0..2u8) == 1;
        let magnitude = rng.random_range(0..100u8);
        let fraction = rng.random_range(0..10u8);
        Record {
            city,
            negative,
            magnitude,
            fraction,
        }
    }

    /// Appends the rendered line, newline included, to `line`.
    pub fn push_line(&self, line: &mut String) {
        line.push_str(self.city);
        line.push(';');
        if self.negative {
            line.push('-');
        }
        if self.magnitude >= 10 {
            line.push(char::from(b'0' + self.magnitude / 10));
        }
        line.push(char::from(b'0' + self.magnitude % 10));
        line.push('.');
        line.push(char::from(b'0' + self.fraction));
        line.push('\n');
    }

    pub fn city(&self) -> &'static str {
        self.city
    }

    pub fn negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> u8 {
        self.magnitude
    }

    pub fn fraction(&self) -> u8 {
        self.fraction
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{};{sign}{}.{}", self.city, self.magnitude, self.fraction)
    }
}
