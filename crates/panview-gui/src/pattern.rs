//! Generated test images, one per supported pixel format.

use ndarray::{Array2, Array3, ArrayD};

pub const PATTERN_WIDTH: usize = 1600;
pub const PATTERN_HEIGHT: usize = 1200;

const CHECKER_CELL: usize = 64;
const RING_SPACING: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Gradient,
    Checker,
    Rings,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Gradient, Pattern::Checker, Pattern::Rings];

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Gradient => "Gradient (gray)",
            Pattern::Checker => "Checker (RGB)",
            Pattern::Rings => "Rings (ARGB)",
        }
    }

    pub fn generate(self, width: usize, height: usize) -> ArrayD<u8> {
        match self {
            Pattern::Gradient => gradient(width, height).into_dyn(),
            Pattern::Checker => checker(width, height).into_dyn(),
            Pattern::Rings => rings(width, height).into_dyn(),
        }
    }
}

fn gradient(width: usize, height: usize) -> Array2<u8> {
    let span = (width + height).max(1);
    Array2::from_shape_fn((height, width), |(y, x)| ((x + y) * 255 / span) as u8)
}

fn checker(width: usize, height: usize) -> Array3<u8> {
    let cols = width.div_ceil(CHECKER_CELL).max(1);
    let rows = height.div_ceil(CHECKER_CELL).max(1);
    Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        let (cx, cy) = (x / CHECKER_CELL, y / CHECKER_CELL);
        let dark = (cx + cy) % 2 == 0;
        let value = match c {
            0 => cx * 255 / cols,
            1 => cy * 255 / rows,
            _ => 160,
        } as u8;
        if dark {
            value / 2
        } else {
            value
        }
    })
}

fn rings(width: usize, height: usize) -> Array3<u8> {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let max_r = (cx * cx + cy * cy).sqrt().max(1.0);
    Array3::from_shape_fn((height, width, 4), |(y, x, c)| {
        let r = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        let band = ((r / RING_SPACING) as usize) % 2 == 0;
        match c {
            0 => (255.0 * (1.0 - 0.75 * r / max_r)) as u8,
            1 if band => 230,
            1 => 40,
            2 => (255.0 * r / max_r) as u8,
            _ => 120,
        }
    })
}
