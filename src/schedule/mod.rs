//! Schedule layout kernel shared by every calendar view: time parsing,
//! projection onto the grid, and grid/timeline assembly.

pub mod geometry;
pub mod grid;
pub mod time;
pub mod timeline;

pub use geometry::{project_range, LayoutError};
pub use grid::{day_grid, team_grid, week_grid, GridLayout, ViewKind};
pub use time::{parse_minutes, TimeParseError};
pub use timeline::{timeline, Timeline};
