//! Small data-structure exercises: a circular list that keeps patients in
//! round-robin order, a two-stack undo/redo history, and two Towers of Hanoi
//! solvers.

pub mod circular_list;
pub mod command;
pub mod console;
pub mod hanoi;
pub mod undo_redo;

pub use circular_list::CircularList;
pub use undo_redo::History;
