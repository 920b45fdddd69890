pub mod exchange;
pub mod normalizer;
pub mod rugpull;
