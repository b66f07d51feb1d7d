use cabinet_estimator::{
    config::{catalog, database},
    core::{project, report, seed},
    errors::{Error, Result},
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Project ids given on the command line, or `None` to report every project.
fn requested_projects() -> Result<Option<Vec<i64>>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(None);
    }

    args.iter()
        .map(|arg| {
            arg.parse::<i64>().map_err(|_| Error::Config {
                message: format!("'{arg}' is not a project id"),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    let requested = requested_projects()?;

    // 3. Open the database and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 4. Seed the catalog, if a catalog file is present
    let catalog_path = catalog::catalog_path();
    if let Some(catalog) = catalog::load_catalog_if_present(&catalog_path)? {
        let summary = seed::seed_catalog(&db, &catalog).await?;
        info!(
            materials = summary.materials,
            hardware = summary.hardware,
            labor = summary.labor,
            "Catalog seeded from {}",
            catalog_path.display()
        );
    }

    // 5. Print the estimates
    let project_ids = match requested {
        Some(ids) => ids,
        None => project::list_all_projects(&db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect(),
    };

    if project_ids.is_empty() {
        warn!("No projects to estimate");
    }

    for project_id in project_ids {
        let estimate = report::generate_project_estimate(&db, project_id).await?;
        println!("{}\n", report::render_project_estimate(&estimate));
    }

    Ok(())
}
