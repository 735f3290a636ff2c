pub mod bitset;
pub mod dna;
