use std::fmt::Display;

/// The fixed palette every block and goal colour is drawn from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Colour {
    PacificPoint,
    RealRed,
    OldOlive,
    DaffodilDelight,
}
impl Colour {
    pub const ALL: [Colour; 4] = [
        Colour::PacificPoint,
        Colour::RealRed,
        Colour::OldOlive,
        Colour::DaffodilDelight,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::PacificPoint => (1, 128, 181),
            Colour::RealRed => (199, 44, 58),
            Colour::OldOlive => (138, 151, 71),
            Colour::DaffodilDelight => (255, 211, 92),
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Colour::PacificPoint => "Pacific Point",
            Colour::RealRed => "Real Red",
            Colour::OldOlive => "Old Olive",
            Colour::DaffodilDelight => "Daffodil Delight",
        }
    }
    /// reverse lookup for anything holding raw rgb values, e.g. a renderer
    pub fn from_rgb(rgb: (u8, u8, u8)) -> Option<Colour> {
        Colour::ALL.into_iter().find(|c| c.rgb() == rgb)
    }
}
impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use crate::Colour;

    #[test]
    fn palette_is_distinct() {
        assert!(Colour::ALL.iter().map(|c| c.rgb()).all_unique());
        assert!(Colour::ALL.iter().map(|c| c.name()).all_unique());
        for c in Colour::ALL {
            assert_eq!(Some(c), Colour::from_rgb(c.rgb()));
        }
        assert_eq!(None, Colour::from_rgb((0, 0, 0)));
    }
}
