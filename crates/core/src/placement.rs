//! Placement engine - overlay a piece on the field and test for collision
//!
//! The field region under the piece footprint is clipped out and the piece is
//! added to it cell by cell. Any resulting value above `COLLISION_THRESHOLD`
//! means an occupied piece cell landed on an occupied field cell. The field
//! itself is never modified here.

use crate::grid::{Grid, GridError};
use crate::types::COLLISION_THRESHOLD;

/// Result of one placement attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Field region plus piece; `None` when the footprint left the field
    pub overlay: Option<Grid>,
    pub collides: bool,
}

impl Placement {
    fn out_of_field() -> Self {
        Self {
            overlay: None,
            collides: true,
        }
    }
}

/// Overlay `piece` on `field` at (top, left)
///
/// A footprint reaching outside the field, or past the `i32` range, is a
/// collision. Other grid errors propagate.
pub fn try_place(field: &Grid, piece: &Grid, top: i32, left: i32) -> Result<Placement, GridError> {
    let (Some(bottom), Some(right)) = (far_edge(top, piece.rows()), far_edge(left, piece.cols()))
    else {
        return Ok(Placement::out_of_field());
    };

    let region = match field.clip(top, left, bottom, right) {
        Ok(region) => region,
        Err(GridError::OutOfRange { .. }) => return Ok(Placement::out_of_field()),
        Err(e) => return Err(e),
    };

    let overlay = region.add(piece)?;
    let collides = overlay.any_greater_than(COLLISION_THRESHOLD);
    Ok(Placement {
        overlay: Some(overlay),
        collides,
    })
}

fn far_edge(origin: i32, extent: usize) -> Option<i32> {
    i32::try_from(extent).ok().and_then(|extent| origin.checked_add(extent))
}

/// Copy of `field` with `overlay` pasted at (top, left)
pub fn composite(field: &Grid, overlay: &Grid, top: i32, left: i32) -> Result<Grid, GridError> {
    let mut out = field.clone();
    out.paste(overlay, top, left)?;
    Ok(out)
}
