//! Account business logic - Customer accounts at the top of the ownership hierarchy.
//!
//! Deleting an account removes every project under it, and with them all rooms,
//! specifications, cabinets and drawers.

use crate::{
    core::{project, required_text},
    entities::{Account, Project, account},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Editable fields of an account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccountInput {
    /// Customer or company name
    pub name: String,
    /// Address invoices are sent to
    pub billing_address: String,
    /// Phone number for billing questions
    pub billing_phone: String,
    /// Email address invoices are sent to
    pub billing_email: String,
    /// Primary contact at the customer
    pub contact_name: String,
    /// Discount rate (e.g. 0.10 for 10%)
    pub discount: Decimal,
}

/// Retrieves all accounts, ordered alphabetically by name.
pub async fn list_accounts(db: &DatabaseConnection) -> Result<Vec<account::Model>> {
    Account::find()
        .order_by_asc(account::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an account by its unique ID.
pub async fn get_account_by_id<C>(db: &C, account_id: i64) -> Result<Option<account::Model>>
where
    C: ConnectionTrait,
{
    Account::find_by_id(account_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new customer account.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_account(db: &DatabaseConnection, input: AccountInput) -> Result<account::Model> {
    let account = account::ActiveModel {
        name: Set(required_text("Account name", &input.name)?),
        billing_address: Set(input.billing_address),
        billing_phone: Set(input.billing_phone),
        billing_email: Set(input.billing_email),
        contact_name: Set(input.contact_name),
        discount: Set(input.discount),
        ..Default::default()
    };

    let created = account.insert(db).await?;
    info!(account_id = created.id, "Account created");
    Ok(created)
}

/// Replaces the editable fields of an account.
pub async fn update_account(
    db: &DatabaseConnection,
    account_id: i64,
    input: AccountInput,
) -> Result<account::Model> {
    let name = required_text("Account name", &input.name)?;

    let mut account: account::ActiveModel = get_account_by_id(db, account_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Account",
            id: account_id,
        })?
        .into();

    account.name = Set(name);
    account.billing_address = Set(input.billing_address);
    account.billing_phone = Set(input.billing_phone);
    account.billing_email = Set(input.billing_email);
    account.contact_name = Set(input.contact_name);
    account.discount = Set(input.discount);

    account.update(db).await.map_err(Into::into)
}

/// Deletes an account together with all of its projects. Returns the deleted account.
#[instrument(skip(db))]
pub async fn delete_account(db: &DatabaseConnection, account_id: i64) -> Result<account::Model> {
    let txn = db.begin().await?;

    let account = get_account_by_id(&txn, account_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Account",
            id: account_id,
        })?;

    let project_ids: Vec<i64> = Project::find()
        .select_only()
        .column(crate::entities::project::Column::Id)
        .filter(crate::entities::project::Column::AccountId.eq(account_id))
        .into_tuple()
        .all(&txn)
        .await?;

    for project_id in &project_ids {
        project::remove_project_tree(&txn, *project_id).await?;
    }

    Account::delete_by_id(account_id).exec(&txn).await?;
    txn.commit().await?;

    info!(account_id, projects = project_ids.len(), "Account deleted");
    Ok(account)
}
