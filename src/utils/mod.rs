pub mod clock;
pub mod formatting;
pub mod path;
pub mod table;
