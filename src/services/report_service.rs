use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::AppState;
use crate::models::country::CountryRow;
use crate::services::fetch_service::fetch_countries;
use crate::types::external::ApiCountry;
use crate::utils::error::AppError;
use crate::utils::format::{group_thousands, page_slug, usd_trillions};

// The downstream table shows a fixed top-20.
const MAX_RANKED: usize = 20;

pub struct ReportSummary {
    pub countries_written: usize,
    pub output_path: PathBuf,
}

/// One full run: fetch, rank, write. `None` means the run produced no
/// report (fetch failure or empty payload) and any existing file stays as
/// it was.
pub async fn build_report(state: &AppState) -> Result<Option<ReportSummary>, AppError> {
    let Some(countries) = fetch_countries(state).await else {
        return Ok(None);
    };
    if countries.is_empty() {
        return Ok(None);
    }

    let rows = rank_countries(countries);
    write_report(&rows, &state.output_path).await?;

    Ok(Some(ReportSummary {
        countries_written: rows.len(),
        output_path: state.output_path.clone(),
    }))
}

pub fn rank_countries(mut countries: Vec<ApiCountry>) -> Vec<CountryRow> {
    // Stable sort: ties keep the order the API returned them in.
    countries.sort_by(|a, b| b.population.cmp(&a.population));

    countries
        .into_iter()
        .take(MAX_RANKED)
        .enumerate()
        .map(|(idx, c)| {
            let population = c.population * 1000;

            let total_gdp_ppp = if c.gdp_per_capita != 0.0 && population != 0 {
                c.gdp_per_capita * population as f64
            } else {
                0.0
            };

            let gdp_nominal = if c.gdp != 0.0 {
                usd_trillions(c.gdp / 1_000_000.0)
            } else {
                "N/A".to_string()
            };
            let gdp_ppp = if total_gdp_ppp != 0.0 {
                usd_trillions(total_gdp_ppp / 1_000_000_000_000.0)
            } else {
                "N/A".to_string()
            };

            let link = page_slug(&c.name);
            CountryRow {
                rank: (idx + 1) as u32,
                name: c.name,
                flag: c.iso2.to_lowercase(),
                population: group_thousands(population),
                // vestigial column the consuming page still expects
                share: "N/A".to_string(),
                gdp_nominal,
                gdp_ppp,
                link,
            }
        })
        .collect()
}

pub async fn write_report(rows: &[CountryRow], path: &Path) -> Result<(), AppError> {
    // 4-space indentation, the layout the table page was built against.
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    rows.serialize(&mut ser)
        .map_err(|e| AppError::Output(format!("Could not serialize the report: {}", e)))?;

    tokio::fs::write(path, buf)
        .await
        .map_err(|e| AppError::Output(format!("Could not write {}: {}", path.display(), e)))?;

    Ok(())
}
