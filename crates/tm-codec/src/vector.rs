use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tm_linalg::Vector;

use crate::error::{CodecError, Result};
use crate::layout::{ELEMENT_SIZE, HEADER_SIZE};

/// Decode a vector file: an i32 length header followed by that many f64
/// values in index order.
///
/// Fails with `InvalidLength` on a negative header and with `Truncated` if
/// the file holds fewer values than the header declares.
pub fn read_vector(path: &Path) -> Result<Vector> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len() as usize;
    let mut reader = BufReader::new(file);

    let mut buf4 = [0u8; 4];
    reader.read_exact(&mut buf4)?;
    let len = i32::from_le_bytes(buf4);
    if len < 0 {
        return Err(CodecError::InvalidLength(len));
    }
    let len = len as usize;

    let expected = HEADER_SIZE + len * ELEMENT_SIZE;
    if file_len < expected {
        return Err(CodecError::Truncated {
            expected,
            actual: file_len,
        });
    }

    let mut data = Vec::with_capacity(len);
    let mut buf8 = [0u8; 8];
    for _ in 0..len {
        reader.read_exact(&mut buf8)?;
        data.push(f64::from_le_bytes(buf8));
    }

    Ok(Vector::from_vec(data))
}
