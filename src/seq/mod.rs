pub mod encoded;

pub use self::encoded::EncodedSequence;
