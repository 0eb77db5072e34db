use crate::{Block, Colour, Pos, Quad, Quadrant};

/// this has very little error handling, must be a square of colour letters with a power of 2 side length
///
/// Letters are `b` (Pacific Point), `r` (Real Red), `o` (Old Olive) and `y` (Daffodil Delight).
/// Every cell becomes its own unit block, one pixel wide.
#[macro_export]
macro_rules! test_board {
    {$s:literal} => {
        $crate::Block::from_test_format($s)
    };
}

impl Block {
    /// expects rows of whitespace separated colour letters
    /// blank lines are ignored, as is leading/trailing whitespace
    pub fn from_test_format(s: &str) -> Block {
        let rows: Vec<Vec<Colour>> = s
            .lines()
            .map(|line| line.split_ascii_whitespace().map(parse_colour).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let side = rows.len();
        assert!(side.is_power_of_two(), "side {side} is not a power of 2");
        assert!(rows.iter().all(|row| row.len() == side), "rows must be square");
        #[allow(clippy::cast_possible_truncation)] // a test board is far smaller than 2^32
        let (size, depth_limit) = (side as u32, side.trailing_zeros() as u8);

        let mut board = Block::new_root(size, rows[0][0], depth_limit);
        build(&mut board, &rows, 0, 0);
        board
    }
}

fn build(block: &mut Block, rows: &[Vec<Colour>], row: usize, col: usize) {
    if block.is_unit() {
        return;
    }
    let half = block.child_size();
    let corners = Quad::from_fn(|q| {
        let Pos { x, y } = q.offset(half);
        (row + y as usize, col + x as usize)
    });
    block.split(corners.map(|(r, c)| rows[r][c]));
    if let Some(children) = block.children_mut() {
        for q in Quadrant::iter_all() {
            let (r, c) = corners[q];
            build(&mut children[q], rows, r, c);
        }
    }
}

fn parse_colour(s: &str) -> Colour {
    match s {
        "b" => Colour::PacificPoint,
        "r" => Colour::RealRed,
        "o" => Colour::OldOlive,
        "y" => Colour::DaffodilDelight,
        _ => panic!("Invalid colour {s:?}"),
    }
}
