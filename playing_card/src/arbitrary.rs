use quickcheck::{Arbitrary, Gen};

use crate::{ContentSize, Rect};

/// A rectangle with bounded, non-negative size.
///
/// `f64::arbitrary` produces NaN, infinities and huge values, none of which
/// a view's bounds can hold.
#[derive(Clone, Copy, Debug)]
pub struct TestRect(pub Rect);

impl Arbitrary for TestRect {
    fn arbitrary(g: &mut Gen) -> Self {
        let x = (i16::arbitrary(g) % 2000) as f64 / 4.0;
        let y = (i16::arbitrary(g) % 2000) as f64 / 4.0;
        let width = (u16::arbitrary(g) % 4000) as f64 / 4.0;
        let height = (u16::arbitrary(g) % 4000) as f64 / 4.0;
        TestRect(Rect::new(x, y, width, height))
    }
}

/// A zoom factor in `[0, 4)`.
#[derive(Clone, Copy, Debug)]
pub struct SmallFactor(pub f64);

impl Arbitrary for SmallFactor {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallFactor((u8::arbitrary(g) % 64) as f64 / 16.0)
    }
}

impl Arbitrary for ContentSize {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ContentSize::ALL).unwrap()
    }
}
