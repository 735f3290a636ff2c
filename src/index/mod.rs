pub mod sais;
pub mod table;
