//! Character list: filtered characters with star toggles.

mod character_list;

pub use character_list::CharacterList;
