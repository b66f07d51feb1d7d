//! Cabinet pricing - derives the material cost of a cabinet case.
//!
//! Everything here is a pure function over already-loaded records: no database access,
//! no caching. Callers resolve the cabinet's specification materials (see
//! [`crate::core::specification::load_materials`]) and the price is recomputed on
//! every call.
//!
//! Dimensions are inches, so areas are divided by 144 to get square feet.

use crate::{
    entities::{cabinet, material},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Waste allowance applied to both case materials.
///
/// This is fixed and does not read the material's own `waste_factor`.
pub const CASE_WASTE_FACTOR: Decimal = dec!(1.2);

const INCHES_PER_FOOT: Decimal = dec!(12);
const SQ_INCHES_PER_SQ_FOOT: Decimal = dec!(144);

/// The two case materials of a specification, as loaded from the store.
///
/// Either slot may be empty: the reference is nullable and is cleared when the
/// material is deleted from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecificationMaterials {
    /// Specification the materials were loaded from
    pub specification_id: i64,
    /// Case interior material
    pub interior: Option<material::Model>,
    /// Case exterior material
    pub exterior: Option<material::Model>,
}

/// Per-component material cost of one cabinet case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CabinetCostBreakdown {
    /// Left side panel
    pub left_end: Decimal,
    /// Right side panel
    pub right_end: Decimal,
    /// Top panel
    pub top: Decimal,
    /// Bottom panel
    pub bottom: Decimal,
    /// Back panel
    pub back: Decimal,
    /// Cost of all shelves together
    pub shelves: Decimal,
    /// Sum of every component above
    pub total: Decimal,
}

/// `a * b`, or `overflow()` when the product does not fit in a `Decimal`.
fn mul(a: Decimal, b: Decimal, overflow: impl Fn() -> Error) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(overflow)
}

/// Sums the parts, or `overflow()` when the total does not fit in a `Decimal`.
fn sum(parts: &[Decimal], overflow: impl Fn() -> Error) -> Result<Decimal> {
    parts
        .iter()
        .try_fold(Decimal::ZERO, |total, part| total.checked_add(*part))
        .ok_or_else(overflow)
}

/// Marked-up cost per square foot of a sheet material.
///
/// `sheet_cost / ((width / 12) * (length / 12))`, then scaled by `1 + markup`.
///
/// # Errors
/// - [`Error::InvalidMaterialDimensions`] when the sheet width or length is zero, or
///   so small that the sheet has no usable area
/// - [`Error::CostOverflow`] when the cost is too large to represent
pub fn sq_ft_cost(material: &material::Model) -> Result<Decimal> {
    let invalid = || Error::InvalidMaterialDimensions {
        name: material.name.clone(),
        width: material.width,
        length: material.length,
    };
    let overflow = || Error::CostOverflow {
        item: format!("material '{}'", material.name),
    };

    if material.width.is_zero() || material.length.is_zero() {
        return Err(invalid());
    }

    let sheet_area = mul(
        material.width / INCHES_PER_FOOT,
        material.length / INCHES_PER_FOOT,
        overflow,
    )?;
    if sheet_area.is_zero() {
        return Err(invalid());
    }
    let unit_cost = material.sheet_cost.checked_div(sheet_area).ok_or_else(overflow)?;
    let markup = Decimal::ONE.checked_add(material.markup).ok_or_else(overflow)?;

    mul(unit_cost, markup, overflow)
}

/// Computes the material cost of each part of the cabinet case.
///
/// Side, top and bottom panels use the exterior rate when their own finish flag is
/// set. A finished interior switches every panel, the back and the shelves to the
/// exterior rate regardless of the individual flags.
///
/// # Errors
/// - [`Error::MissingMaterial`] if either specification material is absent
/// - [`Error::InvalidMaterialDimensions`] if a material has a zero sheet dimension
/// - [`Error::CostOverflow`] if any cost is too large to represent
pub fn price_breakdown(
    cabinet: &cabinet::Model,
    materials: &SpecificationMaterials,
) -> Result<CabinetCostBreakdown> {
    let interior = materials
        .interior
        .as_ref()
        .ok_or(Error::MissingMaterial {
            specification_id: materials.specification_id,
            role: "interior",
        })?;
    let exterior = materials
        .exterior
        .as_ref()
        .ok_or(Error::MissingMaterial {
            specification_id: materials.specification_id,
            role: "exterior",
        })?;

    let overflow = || Error::CostOverflow {
        item: format!("cabinet {}", cabinet.id),
    };
    let area = |a: Decimal, b: Decimal| mul(a, b, overflow).map(|product| product / SQ_INCHES_PER_SQ_FOOT);

    let interior_cost = mul(sq_ft_cost(interior)?, CASE_WASTE_FACTOR, overflow)?;
    let exterior_cost = mul(sq_ft_cost(exterior)?, CASE_WASTE_FACTOR, overflow)?;

    let vertical = area(cabinet.height, cabinet.depth)?;
    let horizontal = area(cabinet.width, cabinet.depth)?;
    let back_area = area(cabinet.width, cabinet.height)?;

    let panel_rate = |finished: bool| {
        if finished || cabinet.finished_interior {
            exterior_cost
        } else {
            interior_cost
        }
    };
    let inside_rate = panel_rate(false);

    let left_end = mul(vertical, panel_rate(cabinet.finished_left_end), overflow)?;
    let right_end = mul(vertical, panel_rate(cabinet.finished_right_end), overflow)?;
    let top = mul(horizontal, panel_rate(cabinet.finished_top), overflow)?;
    let bottom = mul(horizontal, panel_rate(cabinet.finished_bottom), overflow)?;
    let back = mul(back_area, inside_rate, overflow)?;
    let shelves = mul(
        Decimal::from(cabinet.number_of_shelves),
        mul(horizontal, inside_rate, overflow)?,
        overflow,
    )?;

    Ok(CabinetCostBreakdown {
        left_end,
        right_end,
        top,
        bottom,
        back,
        shelves,
        total: sum(&[left_end, right_end, top, bottom, back, shelves], overflow)?,
    })
}

/// Material cost of a cabinet case.
///
/// Labor and hardware are not included.
///
/// # Errors
/// Same as [`price_breakdown`].
pub fn price(cabinet: &cabinet::Model, materials: &SpecificationMaterials) -> Result<Decimal> {
    price_breakdown(cabinet, materials).map(|breakdown| breakdown.total)
}
