mod footer_bar;
mod input;

pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use input::TextInput;
