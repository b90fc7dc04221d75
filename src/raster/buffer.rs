//! Planar floating point image buffer shared by every raster operation

use crate::io::error::{Result, TileError, invalid_parameter};
use ndarray::{Array3, ArrayView2, ArrayView3, ArrayViewMut3, Axis, Zip};
use rand::Rng;

/// Planar `f32` image with shape (depth, height, width)
///
/// Element (plane `p`, row `r`, column `c`) lives at flat index
/// `p * height * width + r * width + c`. Values are nominally intensities in
/// `[0, 1]`, but masks and accumulators are unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Array3<f32>,
}

impl Image {
    /// Reserve storage for a `height x width x depth` image
    ///
    /// Callers must not rely on the initial contents.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any dimension is zero
    /// - The element count overflows or the allocation cannot be satisfied
    pub fn allocate(height: usize, width: usize, depth: usize) -> Result<Self> {
        let elements = element_count(height, width, depth)?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(elements)
            .map_err(|e| TileError::Resource {
                elements,
                reason: e.to_string(),
            })?;
        buffer.resize(elements, 0.0);

        Self::from_planar(height, width, depth, buffer)
    }

    /// Build an image from planar data laid out as (depth, height, width)
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero or `data` does not hold
    /// exactly `height * width * depth` elements
    pub fn from_planar(height: usize, width: usize, depth: usize, data: Vec<f32>) -> Result<Self> {
        let elements = element_count(height, width, depth)?;
        if data.len() != elements {
            return Err(invalid_parameter(
                "data",
                &data.len(),
                &format!("expected {elements} planar elements"),
            ));
        }

        let data = Array3::from_shape_vec((depth, height, width), data)
            .map_err(|e| invalid_parameter("data", &elements, &e))?;

        Ok(Self { data })
    }

    /// Build an image by evaluating `f(plane, row, column)` for every element
    ///
    /// # Errors
    ///
    /// Returns an error if the allocation fails
    pub fn from_fn<F>(height: usize, width: usize, depth: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> f32,
    {
        let mut image = Self::allocate(height, width, depth)?;
        Zip::indexed(&mut image.data).for_each(|(z, y, x), value| *value = f(z, y, x));
        Ok(image)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// Number of planes (channels)
    pub fn depth(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Total element count, `height * width * depth`
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no elements (never true for allocated images)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the element at (plane, row, column)
    pub fn get(&self, plane: usize, row: usize, column: usize) -> Option<f32> {
        self.data.get((plane, row, column)).copied()
    }

    /// Mutable access to the element at (plane, row, column)
    pub fn get_mut(&mut self, plane: usize, row: usize, column: usize) -> Option<&mut f32> {
        self.data.get_mut((plane, row, column))
    }

    /// View of the whole buffer as (depth, height, width)
    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.data.view()
    }

    /// Mutable view of the whole buffer as (depth, height, width)
    pub fn view_mut(&mut self) -> ArrayViewMut3<'_, f32> {
        self.data.view_mut()
    }

    /// View of a single plane as (height, width)
    pub fn plane(&self, plane: usize) -> Option<ArrayView2<'_, f32>> {
        (plane < self.depth()).then(|| self.data.index_axis(Axis(0), plane))
    }

    /// Elements in planar order
    pub fn to_planar_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: f32) {
        self.data.par_map_inplace(|element| *element = value);
    }

    /// Set every element of one plane to `value`
    ///
    /// # Errors
    ///
    /// Returns an error if `channel` is not in `[0, depth)`
    pub fn fill_channel(&mut self, value: f32, channel: usize) -> Result<()> {
        if channel >= self.depth() {
            return Err(invalid_parameter(
                "channel",
                &channel,
                &format!("image has {} channels", self.depth()),
            ));
        }
        self.data
            .index_axis_mut(Axis(0), channel)
            .par_map_inplace(|element| *element = value);
        Ok(())
    }

    /// Fill every element with an independent uniform sample from `[0, 1)`
    ///
    /// Elements are drawn in planar order so a seeded generator reproduces the same image.
    pub fn fill_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for element in &mut self.data {
            *element = rng.random::<f32>();
        }
    }
}

// Positive dimensions whose product fits in usize
fn element_count(height: usize, width: usize, depth: usize) -> Result<usize> {
    for (parameter, value) in [("height", height), ("width", width), ("depth", depth)] {
        if value == 0 {
            return Err(invalid_parameter(
                parameter,
                &value,
                &"image dimensions must be positive",
            ));
        }
    }

    height
        .checked_mul(width)
        .and_then(|plane| plane.checked_mul(depth))
        .ok_or_else(|| TileError::Resource {
            elements: usize::MAX,
            reason: format!("{height}x{width}x{depth} overflows the element count"),
        })
}
