//! In-place elementwise arithmetic between equally sized buffers
//!
//! Operands only need matching element counts; shapes may differ. The count check
//! happens before either buffer is touched, so a mismatch leaves both unchanged.
//! Division by zero is not guarded and produces IEEE infinities or NaN.

use crate::io::error::{Result, invalid_parameter, size_mismatch};
use crate::raster::Image;
use ndarray::Zip;

/// `target += operand`, elementwise
///
/// # Errors
///
/// Returns a size mismatch error if the element counts differ
pub fn add(target: &mut Image, operand: &Image) -> Result<()> {
    apply("add", target, operand, |a, b| *a += b)
}

/// `target *= operand`, elementwise
///
/// # Errors
///
/// Returns a size mismatch error if the element counts differ
pub fn mul(target: &mut Image, operand: &Image) -> Result<()> {
    apply("mul", target, operand, |a, b| *a *= b)
}

/// `target /= operand`, elementwise
///
/// # Errors
///
/// Returns a size mismatch error if the element counts differ
pub fn div(target: &mut Image, operand: &Image) -> Result<()> {
    apply("div", target, operand, |a, b| *a /= b)
}

fn apply<F>(operation: &'static str, target: &mut Image, operand: &Image, op: F) -> Result<()>
where
    F: Fn(&mut f32, f32) + Sync + Send,
{
    if target.len() != operand.len() {
        return Err(size_mismatch(operation, target.len(), operand.len()));
    }

    // Reinterpret the operand in the target's shape; both are contiguous planar buffers
    let shape = (target.depth(), target.height(), target.width());
    let operand = operand
        .view()
        .into_shape_with_order(shape)
        .map_err(|e| invalid_parameter("operand", &operation, &e))?;

    Zip::from(target.view_mut())
        .and(operand)
        .par_for_each(|a, &b| op(a, b));

    Ok(())
}
