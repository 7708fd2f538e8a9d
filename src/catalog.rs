// Currency catalog: the sorted list of currencies shown by the picker.
// Order is fixed once built so the picker cursor stays a valid position
// for the whole session.

use crate::api::{ApiClient, Currency, CurrencyListResponse};
use crate::error::ConvertError;
use std::collections::HashMap;

/// One selectable currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub code: String,
    pub currency: Currency,
}

impl CatalogEntry {
    /// Human readable form, `"CODE (Name)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.code, self.currency.name)
    }
}

/// Currencies sorted lexicographically by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build from the `data` mapping of the currencies endpoint, one entry
    /// per key.
    pub fn from_map(data: HashMap<String, Currency>) -> Self {
        let mut entries: Vec<CatalogEntry> = data
            .into_iter()
            .map(|(code, currency)| CatalogEntry { code, currency })
            .collect();
        entries.sort_by_cached_key(|e| e.label());
        Catalog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The `"CODE (Name)"` strings in catalog order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(CatalogEntry::label).collect()
    }
}

impl From<CurrencyListResponse> for Catalog {
    fn from(response: CurrencyListResponse) -> Self {
        Catalog::from_map(response.data)
    }
}

/// Fetch the catalog with one request. No retry.
pub fn load(api: &ApiClient) -> Result<Catalog, ConvertError> {
    let catalog = Catalog::from(api.currencies()?);
    log::debug!("loaded {} currencies", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(name: &str) -> Currency {
        Currency {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn labels_are_sorted_and_unique_per_code() {
        let mut data = HashMap::new();
        data.insert("USD".to_string(), currency("US Dollar"));
        data.insert("AUD".to_string(), currency("Australian Dollar"));
        data.insert("EUR".to_string(), currency("Euro"));

        let catalog = Catalog::from_map(data);
        assert_eq!(
            catalog.labels(),
            vec!["AUD (Australian Dollar)", "EUR (Euro)", "USD (US Dollar)"]
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn empty_mapping_gives_empty_catalog() {
        let catalog = Catalog::from_map(HashMap::new());
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }
}
