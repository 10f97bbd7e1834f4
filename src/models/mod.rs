mod photoset;

pub use photoset::*;
