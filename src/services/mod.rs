pub mod codec;
pub mod editor;

pub use editor::Editor;
