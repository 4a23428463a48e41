//! Isometric projection and cube face geometry.

use crate::config::CanvasConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Top,
    Left,
    Right,
}

impl FaceKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FaceKind::Top => "cube-top",
            FaceKind::Left => "cube-left",
            FaceKind::Right => "cube-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub points: [Point; 4],
}

/// Projects a grid cell onto the isometric floor. Weeks run right-down,
/// days run left-down.
pub fn project(week_index: usize, day_index: usize, canvas: &CanvasConfig) -> Point {
    let x = week_index as f64 * canvas.pitch();
    let y = day_index as f64 * canvas.pitch();
    Point::new((x - y) * canvas.cos_angle(), (x + y) * canvas.sin_angle())
}

/// Faces of a unit cube whose top vertex sits at `base` raised by `z`.
/// Order is top, left, right.
pub fn cube_faces(base: Point, z: f64, canvas: &CanvasConfig) -> [Face; 3] {
    let size = canvas.cube_size;
    let dx = size * canvas.cos_angle();
    let dy = size * canvas.sin_angle();
    let (x, y) = (base.x, base.y - z);

    let apex = Point::new(x, y);
    let east = Point::new(x + dx, y + dy);
    let front = Point::new(x, y + size);
    let west = Point::new(x - dx, y + dy);

    let front_low = Point::new(x, y + size + size);
    let east_low = Point::new(x + dx, y + dy + size);
    let west_low = Point::new(x - dx, y + dy + size);

    [
        Face {
            kind: FaceKind::Top,
            points: [apex, east, front, west],
        },
        Face {
            kind: FaceKind::Left,
            points: [west, front, front_low, west_low],
        },
        Face {
            kind: FaceKind::Right,
            points: [front, east, east_low, front_low],
        },
    ]
}
