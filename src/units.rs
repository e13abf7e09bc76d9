use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// PDF points (1/72 of an inch), the unit every physical measurement in the
/// crate is expressed in
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Self::Output {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Self::Output {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = Pt;

    fn div(self, rhs: Pt) -> Self::Output {
        Pt(self.0 / rhs.0)
    }
}

impl Pt {
    /// The larger of two measurements
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}
