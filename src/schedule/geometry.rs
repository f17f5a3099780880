//! Projection of time ranges onto the fixed-scale schedule grid.
//!
//! The vertical grid uses one 60 px row per hour, so one minute maps to one
//! pixel and a full day is 1440 px tall. The horizontal daily timeline maps a
//! full day onto 0-100 %.

use serde::Serialize;

use super::time::{parse_minutes, TimeParseError, MINUTES_PER_DAY};

pub const HOUR_HEIGHT_PX: u32 = 60;
pub const GRID_HEIGHT_PX: u32 = HOUR_HEIGHT_PX * 24;

const PX_PER_MINUTE: u32 = HOUR_HEIGHT_PX / 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error(transparent)]
    Time(#[from] TimeParseError),

    #[error("end {end} is before start {start}")]
    InvertedRange { start: u32, end: u32 },
}

/// Absolutely positioned rectangle inside a grid column, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockRect {
    pub top: u32,
    pub height: u32,
}

impl BlockRect {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn contains(&self, y: u32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

pub fn project_block(start_minutes: u32, end_minutes: u32) -> Result<BlockRect, LayoutError> {
    if end_minutes < start_minutes {
        return Err(LayoutError::InvertedRange {
            start: start_minutes,
            end: end_minutes,
        });
    }

    Ok(BlockRect {
        top: start_minutes * PX_PER_MINUTE,
        height: (end_minutes - start_minutes) * PX_PER_MINUTE,
    })
}

/// Parse both ends of a wall-clock range and project it.
pub fn project_range(start: &str, end: &str) -> Result<BlockRect, LayoutError> {
    let start = parse_minutes(start)?;
    let end = parse_minutes(end)?;
    project_block(start, end)
}

/// Horizontal offset of a time on the 24-hour timeline, in percent.
pub fn timeline_percent(minutes: u32) -> f64 {
    f64::from(minutes) / f64::from(MINUTES_PER_DAY) * 100.0
}
