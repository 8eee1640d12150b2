use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use memmap2::Mmap;

use tm_linalg::Matrix;

use crate::error::{CodecError, Result};
use crate::layout::{TileLayout, BLOCK_DIM, ELEMENT_SIZE, HEADER_SIZE};

/// A parsed tiled matrix file backed by a memory-mapped region.
///
/// Opening a file reads and validates the i32 dimension header, then
/// memory-maps the whole file and checks it is long enough for the payload
/// the header implies. After that, materializing the dense matrix cannot
/// fail.
#[derive(Debug)]
pub struct MatrixFile {
    layout: TileLayout,
    mmap: Mmap,
}

impl MatrixFile {
    /// Open and validate a tiled matrix file from disk.
    ///
    /// Fails with `InvalidDimension` if the declared dimension does not fit
    /// the tile grid, and with `Truncated` if the file holds fewer bytes
    /// than the dimension implies.
    pub fn open(path: &Path) -> Result<MatrixFile> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(&file);

        let mut buf4 = [0u8; 4];
        reader.read_exact(&mut buf4)?;
        let layout = TileLayout::from_dimension(i32::from_le_bytes(buf4))?;

        let mmap = unsafe { Mmap::map(&file)? };

        let expected = HEADER_SIZE + layout.data_size();
        if mmap.len() < expected {
            return Err(CodecError::Truncated {
                expected,
                actual: mmap.len(),
            });
        }

        Ok(MatrixFile { layout, mmap })
    }

    /// Side length declared by the file header.
    pub fn dim(&self) -> usize {
        self.layout.dim()
    }

    /// Tile geometry derived from the header.
    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    /// Materialize the dense matrix.
    ///
    /// Walks the payload in file order (column-major by block, row-major
    /// within each 5x5 tile) and places each value at its global coordinates.
    pub fn to_matrix(&self) -> Matrix {
        let n = self.layout.blocks_per_side();
        let mut matrix = Matrix::zeros(self.layout.dim());
        let mut offset = HEADER_SIZE;

        for bc in 0..n {
            for br in 0..n {
                let (row0, col0) = self.layout.tile_origin(bc, br);
                for i in 0..BLOCK_DIM {
                    for j in 0..BLOCK_DIM {
                        let mut bytes = [0u8; ELEMENT_SIZE];
                        bytes.copy_from_slice(&self.mmap[offset..offset + ELEMENT_SIZE]);
                        matrix.set(row0 + i, col0 + j, f64::from_le_bytes(bytes));
                        offset += ELEMENT_SIZE;
                    }
                }
            }
        }

        matrix
    }
}

/// Decode a tiled matrix file into a dense matrix in one call.
pub fn read_matrix(path: &Path) -> Result<Matrix> {
    Ok(MatrixFile::open(path)?.to_matrix())
}
