use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tm_linalg::{Matrix, Vector};

use crate::error::Result;
use crate::layout::{TileLayout, BLOCK_DIM};

/// Encode a dense matrix into the tiled on-disk layout.
///
/// The exact inverse of [`crate::read_matrix`]: an i32 dimension header,
/// then tiles column-major by block, row-major within each tile.
pub fn write_matrix(path: &Path, matrix: &Matrix) -> Result<()> {
    let layout = TileLayout::from_dimension(matrix.dim() as i32)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(matrix.dim() as i32).to_le_bytes())?;

    let n = layout.blocks_per_side();
    for bc in 0..n {
        for br in 0..n {
            let (row0, col0) = layout.tile_origin(bc, br);
            for i in 0..BLOCK_DIM {
                for j in 0..BLOCK_DIM {
                    let value = matrix.get(row0 + i, col0 + j);
                    writer.write_all(&value.to_le_bytes())?;
                }
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Encode a vector into the flat on-disk layout: i32 length header, then the
/// values in index order.
pub fn write_vector(path: &Path, vector: &Vector) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(vector.len() as i32).to_le_bytes())?;
    for v in vector.iter() {
        writer.write_all(&v.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{read_matrix, read_vector};
    use tempfile::tempdir;

    #[test]
    fn test_matrix_round_trip() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("mat.bin");
        let second = dir.path().join("mat2.bin");

        let mut matrix = Matrix::zeros(20);
        for row in 0..20 {
            for col in 0..20 {
                matrix.set(row, col, (row * 20 + col) as f64 * 0.5);
            }
        }

        // Decode then re-encode reproduces the byte stream exactly.
        write_matrix(&first, &matrix).unwrap();
        let decoded = read_matrix(&first).unwrap();
        assert_eq!(decoded, matrix);

        write_matrix(&second, &decoded).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_vector_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.bin");

        let vector = Vector::from_vec((0..20).map(|i| i as f64 - 10.0).collect());
        write_vector(&path, &vector).unwrap();
        assert_eq!(read_vector(&path).unwrap(), vector);
    }

    #[test]
    fn test_write_rejects_bad_dimension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mat.bin");
        let matrix = Matrix::zeros(7);
        assert!(write_matrix(&path, &matrix).is_err());
    }
}
