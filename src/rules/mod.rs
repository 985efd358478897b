//! Game rules for connect-five

pub mod win;

pub use win::connects_five;
