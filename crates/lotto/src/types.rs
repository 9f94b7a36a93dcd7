use serde::Serialize;
use std::fmt::Display;

/// Number of extractions drawn on every wheel.
pub const NUMBERS_PER_WHEEL: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawHeader {
    pub number: String,
    pub date: String,
}

impl Display for DrawHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} del {}", self.number, self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRow {
    pub wheel: String,
    pub numbers: [String; NUMBERS_PER_WHEEL],
}

impl DrawRow {
    /// The fifth extraction, highlighted in the rendered table.
    pub fn gold(&self) -> &str {
        &self.numbers[NUMBERS_PER_WHEEL - 1]
    }
}

impl Display for DrawRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<12}", self.wheel)?;
        for number in &self.numbers[..NUMBERS_PER_WHEEL - 1] {
            write!(f, " {:>3}", number)?;
        }
        write!(f, " [{:>2}]", self.gold())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    pub header: DrawHeader,
    pub rows: Vec<DrawRow>,
}

impl Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌─ {}", self.header)?;
        writeln!(f, "└─ {} wheel(s)", self.rows.len())?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}
