//! Project business logic - Jobs under a customer account.
//!
//! A project owns rooms, specifications and cabinets. Removing a project removes that
//! whole subtree inside one database transaction.

use crate::{
    core::{account, required_text},
    entities::{Cabinet, Drawer, Project, Room, Specification, cabinet, drawer, project, room, specification},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Editable fields of a project.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectInput {
    /// Project name
    pub name: String,
    /// Job site address
    pub physical_address: String,
    /// Person to call at the job site
    pub site_contact: String,
    /// Site contact phone number
    pub contact_phone: String,
    /// Site contact email address
    pub contact_email: String,
    /// Shop rate billed for labor
    pub hourly_rate: Decimal,
}

/// Retrieves every project, ordered by ID.
pub async fn list_all_projects(db: &DatabaseConnection) -> Result<Vec<project::Model>> {
    Project::find()
        .order_by_asc(project::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the projects of one account, ordered alphabetically by name.
pub async fn list_projects_for_account(
    db: &DatabaseConnection,
    account_id: i64,
) -> Result<Vec<project::Model>> {
    Project::find()
        .filter(project::Column::AccountId.eq(account_id))
        .order_by_asc(project::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a project by its unique ID.
pub async fn get_project_by_id<C>(db: &C, project_id: i64) -> Result<Option<project::Model>>
where
    C: ConnectionTrait,
{
    Project::find_by_id(project_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Loads a project or fails with [`Error::NotFound`].
pub(crate) async fn require_project<C>(db: &C, project_id: i64) -> Result<project::Model>
where
    C: ConnectionTrait,
{
    get_project_by_id(db, project_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Project",
            id: project_id,
        })
}

/// Creates a project under an existing account.
///
/// # Errors
/// Returns an error if the name is blank, the account does not exist, or the insert fails.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_project(
    db: &DatabaseConnection,
    account_id: i64,
    input: ProjectInput,
) -> Result<project::Model> {
    let name = required_text("Project name", &input.name)?;

    if account::get_account_by_id(db, account_id).await?.is_none() {
        return Err(Error::NotFound {
            entity: "Account",
            id: account_id,
        });
    }

    let project = project::ActiveModel {
        name: Set(name),
        account_id: Set(account_id),
        physical_address: Set(input.physical_address),
        site_contact: Set(input.site_contact),
        contact_phone: Set(input.contact_phone),
        contact_email: Set(input.contact_email),
        hourly_rate: Set(input.hourly_rate),
        ..Default::default()
    };

    let created = project.insert(db).await?;
    info!(project_id = created.id, account_id, "Project created");
    Ok(created)
}

/// Replaces the editable fields of a project. The owning account does not change.
pub async fn update_project(
    db: &DatabaseConnection,
    project_id: i64,
    input: ProjectInput,
) -> Result<project::Model> {
    let name = required_text("Project name", &input.name)?;
    let mut project: project::ActiveModel = require_project(db, project_id).await?.into();

    project.name = Set(name);
    project.physical_address = Set(input.physical_address);
    project.site_contact = Set(input.site_contact);
    project.contact_phone = Set(input.contact_phone);
    project.contact_email = Set(input.contact_email);
    project.hourly_rate = Set(input.hourly_rate);

    project.update(db).await.map_err(Into::into)
}

/// Removes a project and everything it owns, leaf records first.
pub(crate) async fn remove_project_tree<C>(conn: &C, project_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let cabinet_ids: Vec<i64> = Cabinet::find()
        .select_only()
        .column(cabinet::Column::Id)
        .filter(cabinet::Column::ProjectId.eq(project_id))
        .into_tuple()
        .all(conn)
        .await?;

    let drawers = Drawer::delete_many()
        .filter(drawer::Column::CabinetId.is_in(cabinet_ids))
        .exec(conn)
        .await?;
    let cabinets = Cabinet::delete_many()
        .filter(cabinet::Column::ProjectId.eq(project_id))
        .exec(conn)
        .await?;
    let rooms = Room::delete_many()
        .filter(room::Column::ProjectId.eq(project_id))
        .exec(conn)
        .await?;
    let specifications = Specification::delete_many()
        .filter(specification::Column::ProjectId.eq(project_id))
        .exec(conn)
        .await?;
    Project::delete_by_id(project_id).exec(conn).await?;

    debug!(
        project_id,
        drawers = drawers.rows_affected,
        cabinets = cabinets.rows_affected,
        rooms = rooms.rows_affected,
        specifications = specifications.rows_affected,
        "Removed project tree"
    );
    Ok(())
}

/// Deletes a project with its rooms, specifications, cabinets and drawers.
/// Returns the deleted project.
#[instrument(skip(db))]
pub async fn delete_project(db: &DatabaseConnection, project_id: i64) -> Result<project::Model> {
    let txn = db.begin().await?;
    let project = require_project(&txn, project_id).await?;
    remove_project_tree(&txn, project_id).await?;
    txn.commit().await?;

    info!(project_id, "Project deleted");
    Ok(project)
}
