use std::io::Read;

use anyhow::{Context, Error, Result};
use csv::ReaderBuilder;
use reqwest::Client;
use tracing::info;

use crate::{
    data::utils::{parse_decimal, required_column},
    models::ReferenceRecord,
};

/// Fetches and parses the cohort-analyzer reference table. Any failure
/// here is fatal to the AUM invocation; there are no partial results.
pub async fn load_reference_table(url: &str, client: &Client) -> Result<Vec<ReferenceRecord>> {
    info!(url, "fetching reference table");

    let res = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to reach reference data source at {}", url))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!(
            "Reference data request failed: {}",
            res.status()
        )));
    }

    let body = res.text().await?;
    let records = parse_reference_csv(body.as_bytes())?;
    info!(rows = records.len(), "reference table loaded");

    Ok(records)
}

pub fn parse_reference_csv<R: Read>(input: R) -> Result<Vec<ReferenceRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.headers()?.clone();
    let firm_idx = required_column(&headers, "Initiating Firm Name", "Reference table")?;
    let category_idx = required_column(&headers, "Client Defined Category Name", "Reference table")?;
    let aum_idx = required_column(&headers, "AUM", "Reference table")?;
    let industry_aum_idx = required_column(&headers, "Industry AUM", "Reference table")?;
    let nna_idx = required_column(&headers, "NNA", "Reference table")?;
    let industry_nna_idx = required_column(&headers, "Industry NNA", "Reference table")?;

    let mut records = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let rec = record
            .with_context(|| format!("Failed to read reference table at row {}", row_idx + 1))?;

        let field = |idx: usize| rec.get(idx).unwrap_or("").trim();

        records.push(ReferenceRecord::new(
            field(firm_idx).to_string(),
            field(category_idx).to_string(),
            parse_decimal(field(aum_idx), "AUM", row_idx)?,
            parse_decimal(field(industry_aum_idx), "Industry AUM", row_idx)?,
            parse_decimal(field(nna_idx), "NNA", row_idx)?,
            parse_decimal(field(industry_nna_idx), "Industry NNA", row_idx)?,
        ));
    }

    Ok(records)
}
