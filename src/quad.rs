//! Names the four children of a block so they don't have to live in a bare `[T; 4]`

use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::pos::Pos;

/// A child slot of a subdivided block.
///
/// Declaration order is the fixed child index order: upper-right, upper-left,
/// lower-left, lower-right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    Ne,
    Nw,
    Sw,
    Se,
}
impl Quadrant {
    /// quadrant containing the cell `(row, col)` of a span whose halves are `half` cells wide
    pub fn from_cell(row: u64, col: u64, half: u64) -> Self {
        match (row < half, col < half) {
            (true, false) => Self::Ne,
            (true, true) => Self::Nw,
            (false, true) => Self::Sw,
            (false, false) => Self::Se,
        }
    }

    pub fn is_north(self) -> bool {
        matches!(self, Self::Ne | Self::Nw)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// offset of this quadrant's upper-left corner from its parent's
    pub fn offset(self, half: u32) -> Pos {
        Pos {
            x: if self.is_west() { 0 } else { half },
            y: if self.is_north() { 0 } else { half },
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Ne => 0,
            Self::Nw => 1,
            Self::Sw => 2,
            Self::Se => 3,
        }
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> + FusedIterator {
        QuadrantIter::new()
    }
}
struct QuadrantIter {
    next: Option<Quadrant>,
}
impl QuadrantIter {
    pub fn new() -> Self {
        QuadrantIter {
            next: Some(Quadrant::Ne),
        }
    }
}
impl Iterator for QuadrantIter {
    type Item = Quadrant;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next;
        self.next = match curr {
            Some(Quadrant::Ne) => Some(Quadrant::Nw),
            Some(Quadrant::Nw) => Some(Quadrant::Sw),
            Some(Quadrant::Sw) => Some(Quadrant::Se),
            _ => None,
        };
        curr
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}
impl FusedIterator for QuadrantIter {}
impl ExactSizeIterator for QuadrantIter {
    fn len(&self) -> usize {
        self.next.map_or(0, |q| 4 - q.index())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub ne: T,
    pub nw: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Quad {
            ne: f(Quadrant::Ne),
            nw: f(Quadrant::Nw),
            sw: f(Quadrant::Sw),
            se: f(Quadrant::Se),
        }
    }
    pub fn as_ref(&self) -> Quad<&T> {
        Quad {
            ne: &self.ne,
            nw: &self.nw,
            sw: &self.sw,
            se: &self.se,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(move |q| &self[q])
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [&mut self.ne, &mut self.nw, &mut self.sw, &mut self.se].into_iter()
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            ne: f(self.ne),
            nw: f(self.nw),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
    pub fn index_map<U>(self, mut f: impl FnMut(Quadrant, T) -> U) -> Quad<U> {
        Quad {
            ne: f(Quadrant::Ne, self.ne),
            nw: f(Quadrant::Nw, self.nw),
            sw: f(Quadrant::Sw, self.sw),
            se: f(Quadrant::Se, self.se),
        }
    }

    // the permutations below only move children between slots, callers fix up positions

    pub(crate) fn rotate_cw(self) -> Quad<T> {
        Quad {
            ne: self.nw,
            nw: self.sw,
            sw: self.se,
            se: self.ne,
        }
    }
    pub(crate) fn rotate_ccw(self) -> Quad<T> {
        Quad {
            ne: self.se,
            nw: self.ne,
            sw: self.nw,
            se: self.sw,
        }
    }
    /// mirror across the vertical center line, left and right trade places
    pub(crate) fn flip_h(self) -> Quad<T> {
        Quad {
            ne: self.nw,
            nw: self.ne,
            sw: self.se,
            se: self.sw,
        }
    }
    /// mirror across the horizontal center line, top and bottom trade places
    pub(crate) fn flip_v(self) -> Quad<T> {
        Quad {
            ne: self.se,
            nw: self.sw,
            sw: self.nw,
            se: self.ne,
        }
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.ne, self.nw, self.sw, self.se].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::Ne => &self.ne,
            Quadrant::Nw => &self.nw,
            Quadrant::Sw => &self.sw,
            Quadrant::Se => &self.se,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::Ne => &mut self.ne,
            Quadrant::Nw => &mut self.nw,
            Quadrant::Sw => &mut self.sw,
            Quadrant::Se => &mut self.se,
        }
    }
}
