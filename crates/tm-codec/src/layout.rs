use crate::error::{CodecError, Result};

/// Side length of a single tile.
pub const BLOCK_DIM: usize = 5;

/// Matrix dimension written by the stock producer (4x4 grid of 5x5 tiles).
pub const MATRIX_DIM: usize = 20;

/// Size in bytes of the i32 header at the start of both file formats.
pub const HEADER_SIZE: usize = 4;

/// Size in bytes of one stored f64 value.
pub const ELEMENT_SIZE: usize = 8;

/// Tile-grid geometry derived from a declared matrix dimension.
///
/// On disk, tiles are ordered column-major by block: all block-rows of
/// block-column 0, then block-column 1, and so on. Within a tile, values are
/// row-major. A `TileLayout` can only be constructed from a dimension that is
/// a positive multiple of [`BLOCK_DIM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    dim: usize,
    blocks_per_side: usize,
}

impl TileLayout {
    /// Validate a declared dimension and derive the tile grid from it.
    pub fn from_dimension(dim: i32) -> Result<TileLayout> {
        if dim <= 0 || dim as usize % BLOCK_DIM != 0 {
            return Err(CodecError::InvalidDimension(dim));
        }
        let dim = dim as usize;
        Ok(TileLayout {
            dim,
            blocks_per_side: dim / BLOCK_DIM,
        })
    }

    /// Side length of the full matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tiles along one side of the grid.
    pub fn blocks_per_side(&self) -> usize {
        self.blocks_per_side
    }

    /// Total number of stored values.
    pub fn element_count(&self) -> usize {
        self.dim * self.dim
    }

    /// Byte size of the value payload following the header.
    pub fn data_size(&self) -> usize {
        self.element_count() * ELEMENT_SIZE
    }

    /// Global `(row, col)` of the top-left corner of the tile at block-column
    /// `bc`, block-row `br`.
    pub fn tile_origin(&self, bc: usize, br: usize) -> (usize, usize) {
        (br * BLOCK_DIM, bc * BLOCK_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_dimension() {
        let layout = TileLayout::from_dimension(20).unwrap();
        assert_eq!(layout.dim(), 20);
        assert_eq!(layout.blocks_per_side(), 4);
        assert_eq!(layout.element_count(), 400);
        assert_eq!(layout.data_size(), 3200);
    }

    #[test]
    fn test_generalized_dimension() {
        let layout = TileLayout::from_dimension(35).unwrap();
        assert_eq!(layout.blocks_per_side(), 7);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            TileLayout::from_dimension(7),
            Err(CodecError::InvalidDimension(7))
        ));
        assert!(TileLayout::from_dimension(0).is_err());
        assert!(TileLayout::from_dimension(-5).is_err());
    }

    #[test]
    fn test_tile_origin() {
        let layout = TileLayout::from_dimension(20).unwrap();
        assert_eq!(layout.tile_origin(0, 0), (0, 0));
        // block-column 1, block-row 2 covers rows 10-14, cols 5-9
        assert_eq!(layout.tile_origin(1, 2), (10, 5));
    }
}
