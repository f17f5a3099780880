//! Store models split into separate files.
//! Re-exported at `crate::db::models` so callers can `use crate::db::models::*;`.

pub mod category;
pub mod event;
pub mod team_member;

pub use self::category::*;
pub use self::event::*;
pub use self::team_member::*;
