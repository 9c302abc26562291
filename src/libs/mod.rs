pub mod colored;
pub mod progopts;
pub mod re;
