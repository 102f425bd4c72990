//! Game rules for Connect Four.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the board methods and the game state machine share one
//! implementation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinKind, WinLine, WinResult, check_win};
