//! Shared stream traits

use std::io::{Read, Seek};

/// Combined trait for a randomly-seekable, readable image stream
pub trait ReadSeek: Read + Seek + Send {}

/// Blanket implementation for anything that is `Read + Seek + Send`
impl<T: Read + Seek + Send> ReadSeek for T {}
