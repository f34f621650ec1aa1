pub mod character;
pub mod editor;

pub use character::{Character, Stance};
pub use editor::{EditorSnapshot, TextEditor};
