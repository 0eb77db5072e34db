use crate::Block;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}
impl Rotation {
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    /// left and right halves trade places
    Horizontal,
    /// top and bottom halves trade places
    Vertical,
}

impl Block {
    /// Rotates this block and every block beneath it by a quarter turn.
    ///
    /// Returns false for leaves, which look the same however they are turned.
    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        if !self.map_children(|children| match rotation {
            Rotation::Clockwise => children.rotate_cw(),
            Rotation::CounterClockwise => children.rotate_ccw(),
        }) {
            return false;
        }
        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                child.rotate(rotation);
            }
        }
        self.reposition(self.position());
        true
    }

    /// Mirrors the immediate children of this block along `axis`.
    ///
    /// Grandchildren move with their parents but are not mirrored themselves.
    /// Returns false for leaves.
    pub fn swap(&mut self, axis: Axis) -> bool {
        if !self.map_children(|children| match axis {
            Axis::Horizontal => children.flip_h(),
            Axis::Vertical => children.flip_v(),
        }) {
            return false;
        }
        self.reposition(self.position());
        true
    }
}
