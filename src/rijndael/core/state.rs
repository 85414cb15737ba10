//! The 4x4 cipher state and round-key shapes.

use std::fmt;

use super::constants::NB;

/// A single 16-byte AES block.
pub type Block = [u8; 16];

/// Four consecutive words of the expanded key, consumed by one AddRoundKey.
pub type RoundKey = [u32; NB];

/// The working value of one block, stored as `state[row][col]`.
///
/// A block maps onto the state column by column: byte `i` of the block lands
/// in row `i % 4`, column `i / 4`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct State([[u8; NB]; 4]);

impl State {
    pub fn from_block(block: &Block) -> Self {
        let mut s = [[0u8; NB]; 4];
        for (row, cells) in s.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = block[row + 4 * col];
            }
        }
        Self(s)
    }

    pub fn to_block(&self) -> Block {
        let mut out = [0u8; 16];
        for (row, cells) in self.0.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                out[4 * col + row] = *cell;
            }
        }
        out
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    #[inline(always)]
    pub fn rows(&self) -> &[[u8; NB]; 4] {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn rows_mut(&mut self) -> &mut [[u8; NB]; 4] {
        &mut self.0
    }

    /// Copies out column `col`, row 0 first.
    #[inline(always)]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    #[inline(always)]
    pub(crate) fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Column-major hex, the same byte order as the block it came from.
impl fmt::LowerHex for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_block() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTING: Block = [
        // col 0
        0x00, 0x01, 0x02, 0x03,
        // col 1
        0x04, 0x05, 0x06, 0x07,
        // col 2
        0x08, 0x09, 0x0a, 0x0b,
        // col 3
        0x0c, 0x0d, 0x0e, 0x0f,
    ];

    #[test]
    fn block_maps_column_major() {
        let state = State::from_block(&COUNTING);
        assert_eq!(state.rows()[0], [0x00, 0x04, 0x08, 0x0c]);
        assert_eq!(state.rows()[3], [0x03, 0x07, 0x0b, 0x0f]);
        assert_eq!(state.column(2), [0x08, 0x09, 0x0a, 0x0b]);
        assert_eq!(state.get(1, 3), 0x0d);
        assert_eq!(state.to_block(), COUNTING);
    }

    #[test]
    fn set_column_writes_one_column() {
        let mut state = State::from_block(&COUNTING);
        state.set_column(1, [0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(state.column(1), [0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(state.column(0), [0x00, 0x01, 0x02, 0x03]);
        assert_eq!(state.column(2), [0x08, 0x09, 0x0a, 0x0b]);
    }

    #[test]
    fn lower_hex_is_block_order() {
        let state = State::from(COUNTING);
        assert_eq!(format!("{state:x}"), "000102030405060708090a0b0c0d0e0f");
    }
}
