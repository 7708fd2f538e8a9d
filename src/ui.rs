// UI layer: the user-facing flows. Each one loads what it needs over the
// API (behind a spinner), then prints results to stdout.

use crate::api::ApiClient;
use crate::catalog::{self, Catalog};
use crate::convert::{self, ConversionRequest};
use crate::picker::{terminal, Picker, PickerOptions, Selection};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::time::Duration;

/// Run `work` while a spinner with `message` ticks on stderr.
fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = work();
    spinner.finish_and_clear();
    result
}

fn load_catalog(api: &ApiClient) -> Result<Catalog> {
    let catalog = with_spinner("Loading currencies...", || catalog::load(api))?;
    Ok(catalog)
}

/// Interactive flow: pick base, targets and amount, then convert. Quitting
/// without a base currency is a silent no-op.
pub fn pick_and_convert(api: &ApiClient, options: PickerOptions) -> Result<()> {
    let catalog = load_catalog(api)?;
    let placeholder = options.placeholder.clone();
    let selection = terminal::run(Picker::new(catalog, options)).context("Currency picker failed")?;
    log::debug!("picker finished with {:?}", selection);

    match resolve(selection, &placeholder)? {
        Some(request) => run_conversion(api, &request),
        None => Ok(()),
    }
}

/// Turn the picker outcome into a conversion job, or `None` when no base
/// currency was chosen.
pub fn resolve(selection: Selection, placeholder: &str) -> Result<Option<ConversionRequest>> {
    let Some(base) = selection.base else {
        return Ok(None);
    };
    let quantity = match selection.amount {
        Some(text) => Some(convert::parse_amount(&text, placeholder)?),
        None => None,
    };
    Ok(Some(ConversionRequest {
        base,
        targets: selection.targets,
        quantity,
    }))
}

/// Print the catalog, one `"CODE (Name)"` per line.
pub fn list(api: &ApiClient) -> Result<()> {
    let catalog = load_catalog(api)?;
    for label in catalog.labels() {
        println!("{}", label);
    }
    Ok(())
}

/// Non-interactive conversion. Codes are upper-cased, deduplicated and
/// sorted.
pub fn convert_direct(api: &ApiClient, base: &str, targets: &[String], amount: Option<f64>) -> Result<()> {
    let targets: BTreeSet<String> = targets
        .iter()
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect();
    let request = ConversionRequest {
        base: base.trim().to_uppercase(),
        targets: targets.into_iter().collect(),
        quantity: amount,
    };
    run_conversion(api, &request)
}

fn run_conversion(api: &ApiClient, request: &ConversionRequest) -> Result<()> {
    let lines = with_spinner("Fetching rates...", || convert::convert(api, request))?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
