//! Builder style entry points that chain bit encoding, key generation and
//! embedding or extraction.

pub mod hide;
pub mod unveil;
