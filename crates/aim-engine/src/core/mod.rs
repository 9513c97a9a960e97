pub mod table;
pub mod vector;
