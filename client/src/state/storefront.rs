//! Storefront filtering and sorting over the site catalogue.
//!
//! The catalogue is fetched once per visit; filters run client-side.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use crate::net::types::SiteListing;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiteSort {
    #[default]
    AuthorityDesc,
    PriceAsc,
    PriceDesc,
    Name,
}

impl SiteSort {
    pub const ALL: [Self; 4] = [Self::AuthorityDesc, Self::PriceAsc, Self::PriceDesc, Self::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthorityDesc => "da",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Name => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AuthorityDesc => "Highest DA",
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::Name => "Name",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteFilter {
    /// Case-insensitive match on name, URL, or category.
    pub search: String,
    pub category: Option<String>,
    pub min_authority: Option<u32>,
    pub max_price: Option<f64>,
    pub sort: SiteSort,
}

impl SiteFilter {
    pub fn matches(&self, site: &SiteListing) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !site.name.to_lowercase().contains(&needle)
            && !site.url.to_lowercase().contains(&needle)
            && !site.category.to_lowercase().contains(&needle)
        {
            return false;
        }
        if let Some(category) = &self.category {
            if !site.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if self.min_authority.is_some_and(|min| site.domain_authority < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| site.price > max) {
            return false;
        }
        true
    }

    /// Matching sites in display order.
    pub fn apply(&self, sites: &[SiteListing]) -> Vec<SiteListing> {
        let mut out: Vec<SiteListing> = sites.iter().filter(|s| self.matches(s)).cloned().collect();
        match self.sort {
            SiteSort::AuthorityDesc => out.sort_by(|a, b| b.domain_authority.cmp(&a.domain_authority)),
            SiteSort::PriceAsc => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SiteSort::PriceDesc => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SiteSort::Name => out.sort_by_key(|s| s.name.to_lowercase()),
        }
        out
    }
}

/// Distinct categories in alphabetical order, for the filter dropdown.
pub fn categories(sites: &[SiteListing]) -> Vec<String> {
    let mut out: Vec<String> = sites.iter().map(|s| s.category.clone()).collect();
    out.sort_by_key(|c| c.to_lowercase());
    out.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    out
}

/// Parse an optional numeric filter input; blank or invalid means "no filter".
pub fn parse_optional<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { trimmed.parse().ok() }
}
