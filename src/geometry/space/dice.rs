//! A cube with labeled faces, and its rotations.

/// `faces[side]` is the label showing on `side`, one of the constants below.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Dice {
    pub faces: [usize; 6],
}

impl Dice {
    pub const TOP: usize = 0;
    pub const BOTTOM: usize = 1;
    pub const FRONT: usize = 2;
    pub const BACK: usize = 3;
    pub const LEFT: usize = 4;
    pub const RIGHT: usize = 5;

    /// Labels `0` on top, `1` in front, `2` left, `3` right, `4` back and `5` below.
    pub fn new() -> Self {
        let mut faces = [0; 6];
        faces[Self::TOP] = 0;
        faces[Self::FRONT] = 1;
        faces[Self::LEFT] = 2;
        faces[Self::RIGHT] = 3;
        faces[Self::BACK] = 4;
        faces[Self::BOTTOM] = 5;
        Dice { faces }
    }

    pub fn with_faces(faces: [usize; 6]) -> Self {
        Dice { faces }
    }

    /// Moves the label on `b` to `a`, `c` to `b`, `d` to `c`, and `a` to `d`.
    fn cycle(&mut self, a: usize, b: usize, c: usize, d: usize) {
        let first = self.faces[a];
        self.faces[a] = self.faces[b];
        self.faces[b] = self.faces[c];
        self.faces[c] = self.faces[d];
        self.faces[d] = first;
    }

    /// A quarter turn about the left-right axis.
    pub fn roll_x(&mut self) {
        self.cycle(Self::TOP, Self::BACK, Self::BOTTOM, Self::FRONT);
    }

    /// A quarter turn about the front-back axis.
    pub fn roll_y(&mut self) {
        self.cycle(Self::TOP, Self::RIGHT, Self::BOTTOM, Self::LEFT);
    }

    /// A quarter turn about the vertical axis.
    pub fn roll_z(&mut self) {
        self.cycle(Self::FRONT, Self::LEFT, Self::BACK, Self::RIGHT);
    }

    /// The labelings of all 24 orientations, starting with this one.
    pub fn all_rolls(&self) -> Vec<[usize; 6]> {
        let mut dice = *self;
        let mut rolls = Vec::with_capacity(24);
        for k in 0..6 {
            for _ in 0..4 {
                rolls.push(dice.faces);
                dice.roll_z();
            }
            if k % 2 == 1 {
                dice.roll_y();
            } else {
                dice.roll_x();
            }
        }
        rolls
    }

    /// Whether some rotation of this dice shows the labeling `other`.
    pub fn can_equal(&self, other: &[usize; 6]) -> bool {
        self.all_rolls().iter().any(|roll| roll == other)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Dice::new()
    }
}
