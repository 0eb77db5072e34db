use std::fmt::Display;
use std::ops::Add;

use crate::Quadrant;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// x increases to the east
/// y increases to the south
pub struct Pos {
    pub x: u32,
    pub y: u32,
}
impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
    /// upper-left corner of the child in quadrant `q` of a block at `self` whose children are `half` wide
    pub fn child(self, q: Quadrant, half: u32) -> Self {
        self + q.offset(half)
    }
    /// true if `self` is inside the square at `corner` with side `size`
    ///
    /// The top and left edges are inside, the bottom and right edges are not.
    pub fn within(self, corner: Pos, size: u32) -> bool {
        corner.x <= self.x
            && corner.y <= self.y
            && u64::from(self.x) < u64::from(corner.x) + u64::from(size)
            && u64::from(self.y) < u64::from(corner.y) + u64::from(size)
    }
}
impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
