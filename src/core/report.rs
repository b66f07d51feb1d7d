//! Estimate report generation.
//!
//! Builds a project estimate room by room: every cabinet with its material cost (or
//! the reason it cannot be priced yet) and drawer count, plus subtotals. The data is
//! returned as plain structs; [`render_project_estimate`] turns it into text for the
//! command-line report.

use crate::{
    core::{account, cabinet, drawer, project, room},
    entities::{account as account_entity, cabinet as cabinet_entity, project as project_entity, room as room_entity},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::{instrument, warn};

/// One cabinet line of an estimate.
#[derive(Debug, Clone)]
pub struct CabinetEstimate {
    /// The cabinet as stored
    pub cabinet: cabinet_entity::Model,
    /// Drawers in the cabinet
    pub drawer_count: u64,
    /// Material cost, `None` when the cabinet cannot be priced
    pub price: Option<Decimal>,
    /// Why the cabinet could not be priced
    pub issue: Option<String>,
}

/// All cabinets of one room.
#[derive(Debug, Clone)]
pub struct RoomEstimate {
    /// The room as stored
    pub room: room_entity::Model,
    /// Cabinets in cabinet-number order
    pub cabinets: Vec<CabinetEstimate>,
    /// Drawers across all cabinets in the room
    pub drawer_count: u64,
    /// Sum of the priced cabinets in the room
    pub subtotal: Decimal,
}

/// Material estimate for a whole project.
#[derive(Debug, Clone)]
pub struct ProjectEstimate {
    /// Customer the project belongs to
    pub account: account_entity::Model,
    /// The project as stored
    pub project: project_entity::Model,
    /// Rooms in alphabetical order
    pub rooms: Vec<RoomEstimate>,
    /// Sum of all priced cabinets
    pub material_total: Decimal,
    /// Cabinets left out of the total because they could not be priced
    pub unpriced_cabinets: usize,
}

/// Prices one cabinet, turning data-entry problems into a report note.
///
/// Database failures still propagate.
async fn estimate_cabinet(
    db: &DatabaseConnection,
    cabinet: cabinet_entity::Model,
) -> Result<CabinetEstimate> {
    let drawer_count = drawer::count_for_cabinet(db, cabinet.id).await?;

    let (price, issue) = match cabinet::price_cabinet_model(db, &cabinet).await {
        Ok(price) => (Some(price), None),
        Err(
            e @ (Error::MissingSpecification { .. }
            | Error::MissingMaterial { .. }
            | Error::InvalidMaterialDimensions { .. }
            | Error::CostOverflow { .. }),
        ) => {
            warn!(cabinet_id = cabinet.id, "Cabinet cannot be priced: {e}");
            (None, Some(e.to_string()))
        }
        Err(e) => return Err(e),
    };

    Ok(CabinetEstimate {
        cabinet,
        drawer_count,
        price,
        issue,
    })
}

/// Generates the material estimate for a project.
///
/// # Errors
/// Returns an error if the project or its account does not exist, or a query fails.
/// Cabinets that cannot be priced are reported, not treated as errors.
#[instrument(skip(db))]
pub async fn generate_project_estimate(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<ProjectEstimate> {
    let project = project::get_project_by_id(db, project_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Project",
            id: project_id,
        })?;
    let account = account::get_account_by_id(db, project.account_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Account",
            id: project.account_id,
        })?;

    let mut rooms = Vec::new();
    let mut material_total = Decimal::ZERO;
    let mut unpriced_cabinets = 0;

    for room in room::list_rooms_for_project(db, project_id).await? {
        let mut cabinets = Vec::new();
        for cabinet in cabinet::list_cabinets_for_room(db, room.id).await? {
            cabinets.push(estimate_cabinet(db, cabinet).await?);
        }

        let subtotal: Decimal = cabinets.iter().filter_map(|c| c.price).sum();
        unpriced_cabinets += cabinets.iter().filter(|c| c.price.is_none()).count();
        material_total += subtotal;

        rooms.push(RoomEstimate {
            drawer_count: cabinets.iter().map(|c| c.drawer_count).sum(),
            room,
            cabinets,
            subtotal,
        });
    }

    Ok(ProjectEstimate {
        account,
        project,
        rooms,
        material_total,
        unpriced_cabinets,
    })
}

/// Formats a monetary amount with two decimal places, e.g. `$1,234.50`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}

/// One-line summary of a cabinet estimate, e.g. `#3  30 x 30 x 12  2 drawers  $45.00`.
#[must_use]
pub fn format_cabinet_line(estimate: &CabinetEstimate) -> String {
    let cabinet = &estimate.cabinet;
    let cost = match (estimate.price, estimate.issue.as_deref()) {
        (Some(price), _) => format_currency(price),
        (None, Some(issue)) => format!("not priced: {issue}"),
        (None, None) => "not priced".to_string(),
    };
    let plural = if estimate.drawer_count == 1 { "" } else { "s" };

    format!(
        "#{}  {} x {} x {}  {} drawer{plural}  {cost}",
        cabinet.cabinet_number,
        cabinet.width.normalize(),
        cabinet.height.normalize(),
        cabinet.depth.normalize(),
        estimate.drawer_count,
    )
}

/// Renders a full project estimate as plain text.
#[must_use]
pub fn render_project_estimate(estimate: &ProjectEstimate) -> String {
    let mut lines = vec![format!(
        "{} - {} (project {})",
        estimate.account.name, estimate.project.name, estimate.project.id
    )];

    for room in &estimate.rooms {
        lines.push(format!(
            "  {} ({} drawers): {}",
            room.room.name,
            room.drawer_count,
            format_currency(room.subtotal)
        ));
        lines.extend(
            room.cabinets
                .iter()
                .map(|cabinet| format!("    {}", format_cabinet_line(cabinet))),
        );
    }

    let mut total = format!("  Material total: {}", format_currency(estimate.material_total));
    if estimate.unpriced_cabinets > 0 {
        total.push_str(&format!(" ({} cabinets not priced)", estimate.unpriced_cabinets));
    }
    lines.push(total);

    lines.join("\n")
}
