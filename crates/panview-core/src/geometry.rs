//! Integer geometry for the viewport.
//!
//! [`PixelRect`] uses inclusive edges: a rectangle at `left` with `width` columns has
//! `right == left + width - 1`. Centres are `(left + right) / 2`, truncated toward zero.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Integer 2D point or vector in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Axis-aligned rectangle with inclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl PixelRect {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            right: left + width as i32 - 1,
            bottom: top + height as i32 - 1,
        }
    }

    /// Rectangle at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1).max(0) as u32
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new(
            midpoint(self.left, self.right),
            midpoint(self.top, self.bottom),
        )
    }

    /// Translate so the left edge sits at `x`, keeping the width.
    pub fn move_left(&mut self, x: i32) {
        self.right += x - self.left;
        self.left = x;
    }

    pub fn move_top(&mut self, y: i32) {
        self.bottom += y - self.top;
        self.top = y;
    }

    pub fn move_right(&mut self, x: i32) {
        self.left += x - self.right;
        self.right = x;
    }

    pub fn move_bottom(&mut self, y: i32) {
        self.top += y - self.bottom;
        self.bottom = y;
    }

    /// Translate so `center()` returns `p`.
    pub fn move_center(&mut self, p: Point) {
        let w = self.right - self.left;
        let h = self.bottom - self.top;
        self.left = p.x - w / 2;
        self.top = p.y - h / 2;
        self.right = self.left + w;
        self.bottom = self.top + h;
    }

    /// Overwrite the horizontal span with `[left, right]`.
    pub fn set_horizontal(&mut self, left: i32, right: i32) {
        self.left = left;
        self.right = right;
    }

    /// Overwrite the vertical span with `[top, bottom]`.
    pub fn set_vertical(&mut self, top: i32, bottom: i32) {
        self.top = top;
        self.bottom = bottom;
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) / 2) as i32
}
