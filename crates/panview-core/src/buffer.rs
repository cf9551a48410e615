use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage, RgbaImage};
use ndarray::{s, Array3, ArrayView1, ArrayView3, ArrayViewD, Axis, Ix3};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, ViewerError};
use crate::format::PixelFormat;
use crate::geometry::{PixelRect, Size};

/// The image being viewed.
/// Pixel data is stored row-major with shape = (height, width, channels).
#[derive(Clone, Debug)]
pub struct SourceImage {
    data: Array3<u8>,
    format: PixelFormat,
}

impl SourceImage {
    /// Wrap an interleaved pixel buffer.
    ///
    /// The channel count is validated before anything else, so an unsupported layout fails
    /// with [`ViewerError::InvalidFormat`] regardless of the buffer contents.
    pub fn from_raw(pixels: Vec<u8>, width: usize, height: usize, channels: usize) -> Result<Self> {
        let format = PixelFormat::from_channels(channels)?;
        check_dimensions(width, height)?;
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(ViewerError::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(ViewerError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, channels), pixels).map_err(|_| {
            ViewerError::BufferSize {
                expected,
                actual: expected,
            }
        })?;
        Ok(Self { data, format })
    }

    /// Copy an `(h, w)` or `(h, w, c)` array into a new image.
    pub fn from_array(view: ArrayViewD<'_, u8>) -> Result<Self> {
        let format = PixelFormat::from_shape(Some(view.shape()))?;
        let view = if view.ndim() == 2 {
            view.insert_axis(Axis(2))
        } else {
            view
        };
        let view = view
            .into_dimensionality::<Ix3>()
            .map_err(|e| ViewerError::InvalidFormat(e.to_string()))?;
        let (height, width, _) = view.dim();
        check_dimensions(width, height)?;
        Ok(Self {
            data: view.as_standard_layout().into_owned(),
            format,
        })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Resample to `target` with the given filter. Returns a plain copy when the size is
    /// unchanged.
    pub fn resized(&self, target: Size, filter: FilterType) -> SourceImage {
        if target == self.size() || target.is_empty() {
            return self.clone();
        }

        let (w, h) = (self.width() as u32, self.height() as u32);
        let raw: Vec<u8> = self.data.iter().copied().collect();

        let resized = match self.format {
            PixelFormat::Grayscale8 | PixelFormat::Invalid => {
                let img = GrayImage::from_raw(w, h, raw).expect("buffer size matches dimensions");
                imageops::resize(&img, target.width, target.height, filter).into_raw()
            }
            PixelFormat::Rgb888 => {
                let img = RgbImage::from_raw(w, h, raw).expect("buffer size matches dimensions");
                imageops::resize(&img, target.width, target.height, filter).into_raw()
            }
            PixelFormat::Argb32 => {
                // image treats the last channel as alpha
                let mut raw = raw;
                raw.chunks_exact_mut(4).for_each(|px| px.rotate_left(1));
                let img = RgbaImage::from_raw(w, h, raw).expect("buffer size matches dimensions");
                let mut out = imageops::resize(&img, target.width, target.height, filter).into_raw();
                out.chunks_exact_mut(4).for_each(|px| px.rotate_right(1));
                out
            }
        };

        let channels = self.data.dim().2;
        let data = Array3::from_shape_vec(
            (target.height as usize, target.width as usize, channels),
            resized,
        )
        .expect("buffer size matches dimensions");
        SourceImage {
            data,
            format: self.format,
        }
    }

    /// Copy the pixels covered by `rect`, intersected with the image bounds.
    pub fn crop(&self, rect: &PixelRect) -> DisplayBuffer {
        DisplayBuffer {
            data: self.slice_rect(rect),
            format: self.format,
        }
    }

    /// Like [`SourceImage::crop`], but keeps the result resamplable.
    pub fn cropped(&self, rect: &PixelRect) -> SourceImage {
        SourceImage {
            data: self.slice_rect(rect),
            format: self.format,
        }
    }

    fn slice_rect(&self, rect: &PixelRect) -> Array3<u8> {
        let left = rect.left().max(0) as usize;
        let top = rect.top().max(0) as usize;
        let right = (rect.right() + 1).clamp(0, self.width() as i32) as usize;
        let bottom = (rect.bottom() + 1).clamp(0, self.height() as i32) as usize;

        if left < right && top < bottom {
            self.data.slice(s![top..bottom, left..right, ..]).to_owned()
        } else {
            Array3::zeros((0, 0, self.data.dim().2))
        }
    }
}

/// Reject empty images and sizes the i32 geometry cannot address.
fn check_dimensions(width: usize, height: usize) -> Result<()> {
    let max = i32::MAX as usize;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(ViewerError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// An owned, cropped region handed to a display surface.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayBuffer {
    /// Pixel data, row-major, shape = (height, width, channels)
    pub data: Array3<u8>,
    pub format: PixelFormat,
}

impl DisplayBuffer {
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }

    /// Channel values of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Vec<u8> {
        self.data.slice(s![y, x, ..]).to_vec()
    }

    /// Expand to unpremultiplied RGBA, 4 bytes per pixel, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let (h, w, _) = self.data.dim();

        let rows: Vec<Vec<u8>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
            (0..h).into_par_iter().map(|row| self.row_rgba(row)).collect()
        } else {
            (0..h).map(|row| self.row_rgba(row)).collect()
        };

        rows.concat()
    }

    fn row_rgba(&self, row: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width() * 4);
        for px in self.data.index_axis(Axis(0), row).outer_iter() {
            out.extend_from_slice(&rgba(self.format, px));
        }
        out
    }
}

fn rgba(format: PixelFormat, px: ArrayView1<'_, u8>) -> [u8; 4] {
    match format {
        PixelFormat::Grayscale8 | PixelFormat::Invalid => [px[0], px[0], px[0], 255],
        PixelFormat::Rgb888 => [px[0], px[1], px[2], 255],
        PixelFormat::Argb32 => [px[1], px[2], px[3], px[0]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, IxDyn};

    fn ramp(width: usize, height: usize) -> SourceImage {
        let pixels = (0..width * height).map(|i| i as u8).collect();
        SourceImage::from_raw(pixels, width, height, 1).unwrap()
    }

    #[test]
    fn from_raw_rejects_bad_channel_count_first() {
        // Wrong length too, but the format error wins.
        let err = SourceImage::from_raw(vec![0; 3], 4, 4, 2).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidFormat(_)));
    }

    #[test]
    fn from_raw_rejects_length_mismatch() {
        let err = SourceImage::from_raw(vec![0; 10], 4, 4, 1).unwrap_err();
        assert!(matches!(
            err,
            ViewerError::BufferSize {
                expected: 16,
                actual: 10
            }
        ));
    }

    #[test]
    fn from_raw_rejects_overflowing_dimensions() {
        let err = SourceImage::from_raw(vec![0; 4], usize::MAX / 2 + 1, 2, 1).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidDimensions { .. }));

        let err = SourceImage::from_raw(vec![0; 4], 1 << 31, 1, 1).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidDimensions { .. }));
    }

    #[test]
    fn cropped_keeps_format() {
        let img = SourceImage::from_raw(vec![7; 4 * 4 * 3], 4, 4, 3).unwrap();
        let part = img.cropped(&PixelRect::new(1, 2, 3, 2));
        assert_eq!(part.size(), Size::new(3, 2));
        assert_eq!(part.format(), PixelFormat::Rgb888);
    }

    #[test]
    fn from_raw_rejects_zero_dimensions() {
        let err = SourceImage::from_raw(vec![], 0, 4, 3).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidDimensions { .. }));
    }

    #[test]
    fn from_array_accepts_2d_as_gray() {
        let arr = Array2::<u8>::from_elem((3, 5), 7);
        let img = SourceImage::from_array(arr.view().into_dyn()).unwrap();
        assert_eq!(img.format(), PixelFormat::Grayscale8);
        assert_eq!(img.size(), Size::new(5, 3));
    }

    #[test]
    fn from_array_rejects_4d() {
        let arr = ndarray::ArrayD::<u8>::zeros(IxDyn(&[2, 2, 2, 3]));
        assert!(matches!(
            SourceImage::from_array(arr.view()),
            Err(ViewerError::InvalidFormat(_))
        ));
    }

    #[test]
    fn from_array_handles_transposed_input() {
        let arr = Array2::from_shape_fn((2, 3), |(r, c)| (r * 10 + c) as u8);
        let t = arr.t();
        let img = SourceImage::from_array(t.into_dyn()).unwrap();
        assert_eq!(img.size(), Size::new(2, 3));
        assert_eq!(img.data()[[2, 1, 0]], 12);
    }

    #[test]
    fn crop_copies_inclusive_rect() {
        let img = ramp(4, 4);
        let buf = img.crop(&PixelRect::new(1, 1, 2, 2));
        assert_eq!(buf.size(), Size::new(2, 2));
        assert_eq!(buf.pixel(0, 0), vec![5]);
        assert_eq!(buf.pixel(1, 1), vec![10]);
    }

    #[test]
    fn crop_intersects_with_bounds() {
        let img = ramp(4, 4);
        let buf = img.crop(&PixelRect::new(-2, 2, 10, 10));
        assert_eq!(buf.size(), Size::new(4, 2));
        let empty = img.crop(&PixelRect::new(10, 10, 2, 2));
        assert_eq!(empty.size(), Size::new(0, 0));
    }

    #[test]
    fn resize_same_size_is_identity() {
        let img = ramp(6, 3);
        let out = img.resized(Size::new(6, 3), FilterType::Triangle);
        assert_eq!(out.data(), img.data());
    }

    #[test]
    fn resize_keeps_argb_channel_order() {
        // Opaque red in ARGB
        let pixels = [255u8, 200, 10, 20].repeat(4 * 4);
        let img = SourceImage::from_raw(pixels, 4, 4, 4).unwrap();
        let out = img.resized(Size::new(2, 2), FilterType::Nearest);
        assert_eq!(out.format(), PixelFormat::Argb32);
        assert_eq!(out.data().slice(s![0, 0, ..]).to_vec(), vec![255, 200, 10, 20]);
    }

    #[test]
    fn rgba_expansion_per_format() {
        let gray = SourceImage::from_raw(vec![9], 1, 1, 1).unwrap();
        assert_eq!(gray.crop(&PixelRect::new(0, 0, 1, 1)).to_rgba8(), vec![9, 9, 9, 255]);

        let rgb = SourceImage::from_raw(vec![1, 2, 3], 1, 1, 3).unwrap();
        assert_eq!(rgb.crop(&PixelRect::new(0, 0, 1, 1)).to_rgba8(), vec![1, 2, 3, 255]);

        let argb = SourceImage::from_raw(vec![128, 1, 2, 3], 1, 1, 4).unwrap();
        assert_eq!(argb.crop(&PixelRect::new(0, 0, 1, 1)).to_rgba8(), vec![1, 2, 3, 128]);
    }

    #[test]
    fn rgba_expansion_parallel_path_matches_layout() {
        let (w, h) = (300, 300);
        let pixels = (0..w * h).map(|i| (i % 251) as u8).collect();
        let img = SourceImage::from_raw(pixels, w, h, 1).unwrap();
        let rgba = img.crop(&PixelRect::new(0, 0, w as u32, h as u32)).to_rgba8();
        assert_eq!(rgba.len(), w * h * 4);
        let i = 123 * w + 45;
        let v = (i % 251) as u8;
        assert_eq!(&rgba[i * 4..i * 4 + 4], &[v, v, v, 255]);
    }
}
