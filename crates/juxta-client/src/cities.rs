//! Cities with supplemental knowledge-base data.
//!
//! Any city name can be queried; these are the ones the agent endpoint holds
//! extra metrics for.

/// Cities covered by the agent's knowledge base, alphabetical
pub const KNOWLEDGE_BASE_CITIES: &[&str] = &[
    "Amsterdam", "Athens", "Auckland", "Bangkok", "Barcelona", "Beijing", "Berlin",
    "Bogotá", "Boston", "Brussels", "Budapest", "Buenos Aires", "Cairo", "Cape Town",
    "Chicago", "Chongqing", "Copenhagen", "Delhi", "Dhaka", "Dubai", "Dublin",
    "Guangzhou", "Hong Kong", "Istanbul", "Jakarta", "Johannesburg", "Karachi",
    "Kolkata", "Lagos", "Lima", "Lisbon", "London", "Los Angeles", "Madrid", "Manila",
    "Melbourne", "Mexico City", "Moscow", "Mumbai", "New York", "Osaka", "Paris",
    "Rio de Janeiro", "Rome", "São Paulo", "Seoul", "Shanghai", "Singapore", "Sydney", "Tokyo",
];

/// Knowledge-base cities whose name contains `filter`, ignoring case
///
/// An empty filter returns every city.
///
/// # Examples
///
/// ```
/// use juxta_client::matching_cities;
///
/// assert_eq!(matching_cities("york"), vec!["New York"]);
/// assert_eq!(matching_cities("").len(), 50);
/// ```
pub fn matching_cities(filter: &str) -> Vec<&'static str> {
    let needle = filter.trim().to_lowercase();
    KNOWLEDGE_BASE_CITIES
        .iter()
        .copied()
        .filter(|city| needle.is_empty() || city.to_lowercase().contains(&needle))
        .collect()
}

/// Whether `city` has knowledge-base coverage
pub fn has_knowledge_base(city: &str) -> bool {
    let city = city.trim();
    KNOWLEDGE_BASE_CITIES
        .iter()
        .any(|known| known.to_lowercase() == city.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_substring_and_case_insensitive() {
        assert_eq!(matching_cities("LON"), vec!["Barcelona", "London"]);
    }

    #[test]
    fn test_matching_non_ascii() {
        assert_eq!(matching_cities("são"), vec!["São Paulo"]);
        assert_eq!(matching_cities("BOGOTÁ"), vec!["Bogotá"]);
    }

    #[test]
    fn test_no_match() {
        assert!(matching_cities("Atlantis").is_empty());
    }

    #[test]
    fn test_has_knowledge_base() {
        assert!(has_knowledge_base(" tokyo "));
        assert!(!has_knowledge_base("Springfield"));
    }
}
