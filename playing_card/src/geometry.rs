/// A point in view coordinates, measured in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get a new point moved by the given offset.
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle given by its top-left origin and its size.
///
/// The y axis points down, so `max_y` is the bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Scales the rect by `zoom_factor` around its center.
    pub fn zoom(&self, zoom_factor: f64) -> Rect {
        let zoomed_width = self.size.width * zoom_factor;
        let zoomed_height = self.size.height * zoom_factor;
        let origin_x = self.origin.x + (self.size.width - zoomed_width) / 2.0;
        let origin_y = self.origin.y + (self.size.height - zoomed_height) / 2.0;
        Rect::new(origin_x, origin_y, zoomed_width, zoomed_height)
    }

    pub fn left_half(&self) -> Rect {
        let width = self.size.width / 2.0;
        Rect {
            origin: self.origin,
            size: Size::new(width, self.size.height),
        }
    }

    pub fn right_half(&self) -> Rect {
        let width = self.size.width / 2.0;
        Rect {
            origin: self.origin.offset_by(width, 0.0),
            size: Size::new(width, self.size.height),
        }
    }
}

/// A 2D affine transform, mapping `(x, y)` to
/// `(a * x + c * y + tx, b * x + d * y + ty)`.
///
/// Views apply their transform around the center of their frame, which is why
/// rotating a label never moves its frame origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Concatenates a rotation by `angle` radians onto this transform.
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            tx: self.tx,
            ty: self.ty,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn apply(&self, point: Point) -> Point {
        Point {
            x: self.a * point.x + self.c * point.y + self.tx,
            y: self.b * point.x + self.d * point.y + self.ty,
        }
    }

    /// The rotation angle in radians, in `(-π, π]`.
    pub fn rotation_angle(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Whether this transform turns content upside down, i.e. rotates it by
    /// (approximately) half a turn.
    pub fn is_upside_down(&self) -> bool {
        (self.rotation_angle().abs() - std::f64::consts::PI).abs() < 1e-9
    }
}
