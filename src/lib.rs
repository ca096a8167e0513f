//! Dessert Clicker: a tiny clicker game for the browser terminal.
//!
//! [`dessert`] holds the game itself (catalog, state holder, sharing) plus its
//! renderer; [`input`] and [`widgets`] are the click-target plumbing shared by
//! the renderer and the DOM event handlers in `main.rs`.

pub mod dessert;
pub mod input;
pub mod logging;
pub mod widgets;
