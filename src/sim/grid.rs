//! Block wall generation

use super::state::{Block, BlockColor};
use crate::consts::*;

/// Build the full block wall for a playfield `width` cells wide.
///
/// `BLOCK_ROWS` rows of `width / BLOCK_WIDTH` blocks, row-major. Colors cycle
/// per row so neighbouring rows never match.
pub fn generate_blocks(width: u16) -> Vec<Block> {
    let cols = width / BLOCK_WIDTH;
    let mut blocks = Vec::with_capacity(usize::from(BLOCK_ROWS) * usize::from(cols));

    for row in 0..BLOCK_ROWS {
        let color = BlockColor::for_row(row);
        for col in 0..cols {
            blocks.push(Block {
                x: col * BLOCK_WIDTH,
                y: row + BLOCK_TOP_ROW,
                width: BLOCK_WIDTH,
                color,
                hit: false,
            });
        }
    }

    log::info!(
        "Generated {} blocks ({} rows x {} cols) for width {}",
        blocks.len(),
        BLOCK_ROWS,
        cols,
        width
    );
    blocks
}
