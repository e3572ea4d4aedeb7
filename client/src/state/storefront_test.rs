use super::*;

fn site(name: &str, da: u32, price: f64, category: &str) -> SiteListing {
    SiteListing {
        id: name.to_lowercase(),
        name: name.to_owned(),
        url: format!("https://{}.test", name.to_lowercase()),
        domain_authority: da,
        price,
        category: category.to_owned(),
        description: None,
        turnaround_days: None,
    }
}

fn catalogue() -> Vec<SiteListing> {
    vec![
        site("Alpha", 30, 50.0, "Tech"),
        site("Bravo", 70, 300.0, "Finance"),
        site("Charlie", 55, 120.0, "tech"),
    ]
}

#[test]
fn default_filter_sorts_by_authority_desc() {
    let names: Vec<_> = SiteFilter::default().apply(&catalogue()).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Bravo", "Charlie", "Alpha"]);
}

#[test]
fn category_filter_is_case_insensitive() {
    let filter = SiteFilter { category: Some("TECH".to_owned()), ..SiteFilter::default() };
    assert_eq!(filter.apply(&catalogue()).len(), 2);
}

#[test]
fn min_authority_and_max_price_combine() {
    let filter = SiteFilter { min_authority: Some(40), max_price: Some(200.0), ..SiteFilter::default() };
    let names: Vec<_> = filter.apply(&catalogue()).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Charlie"]);
}

#[test]
fn search_matches_url_and_name() {
    let filter = SiteFilter { search: " bravo ".to_owned(), ..SiteFilter::default() };
    assert_eq!(filter.apply(&catalogue()).len(), 1);
}

#[test]
fn price_sort_ascending() {
    let filter = SiteFilter { sort: SiteSort::PriceAsc, ..SiteFilter::default() };
    let prices: Vec<_> = filter.apply(&catalogue()).into_iter().map(|s| s.price).collect();
    assert_eq!(prices, vec![50.0, 120.0, 300.0]);
}

#[test]
fn categories_are_distinct_and_sorted() {
    assert_eq!(categories(&catalogue()), vec!["Finance".to_owned(), "Tech".to_owned()]);
}

#[test]
fn sort_parse_falls_back_to_default() {
    assert_eq!(SiteSort::parse("price-desc"), SiteSort::PriceDesc);
    assert_eq!(SiteSort::parse("bogus"), SiteSort::AuthorityDesc);
}

#[test]
fn parse_optional_ignores_blank_and_invalid() {
    assert_eq!(parse_optional::<u32>(""), None);
    assert_eq!(parse_optional::<u32>("abc"), None);
    assert_eq!(parse_optional::<u32>(" 42 "), Some(42));
}
