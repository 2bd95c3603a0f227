use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::client::constants::RESPONSE_FORMAT;

/// Time bucketing for metric endpoints.
///
/// Every operation that takes a granularity accepts any `AsRef<str>`, so raw strings are
/// still allowed; the API is the only validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl AsRef<str> for Granularity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date range and bucketing for the traffic metric endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GranularityQuery {
    start: String,
    end: String,
    granularity: String,
    main_domain: bool,
}

impl GranularityQuery {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        granularity: impl AsRef<str>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            granularity: granularity.as_ref().to_string(),
            main_domain: false,
        }
    }

    /// Restricts the query to the root domain instead of including subdomains.
    pub fn with_main_domain(mut self, main_domain: bool) -> Self {
        self.main_domain = main_domain;
        self
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn granularity(&self) -> &str {
        &self.granularity
    }

    pub fn main_domain(&self) -> bool {
        self.main_domain
    }
}

/// Date range and 1-based page index for the ranked list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    start: String,
    end: String,
    page: u32,
    main_domain: bool,
}

impl PageQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            page: 1,
            main_domain: false,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_main_domain(mut self, main_domain: bool) -> Self {
        self.main_domain = main_domain;
        self
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn main_domain(&self) -> bool {
        self.main_domain
    }
}

/// Ordered query string sent with every request.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            if key == "userkey" {
                map.entry(&key, &"<redacted>");
            } else {
                map.entry(&key, &value);
            }
        }
        map.finish()
    }
}

impl QueryParams {
    /// `format=JSON&userkey={api_key}`; the base of every other shape.
    pub fn simple(api_key: &str) -> Self {
        Self(vec![
            ("format", RESPONSE_FORMAT.to_string()),
            ("userkey", api_key.to_string()),
        ])
    }

    pub fn granularity(api_key: &str, query: &GranularityQuery) -> Self {
        let mut params = Self::simple(api_key);
        params.push("start", &query.start);
        params.push("end", &query.end);
        params.push("gr", &query.granularity);
        params.push("md", query.main_domain.to_string());
        params
    }

    pub fn paged(api_key: &str, query: &PageQuery) -> Self {
        let mut params = Self::simple(api_key);
        params.push("start", &query.start);
        params.push("end", &query.end);
        params.push("page", query.page.to_string());
        params.push("md", query.main_domain.to_string());
        params
    }

    /// Optional filters are only sent when present and non-empty.
    pub fn top_sites(api_key: &str, category: Option<&str>, country: Option<&str>) -> Self {
        let mut params = Self::simple(api_key);
        if let Some(category) = category.filter(|value| !value.is_empty()) {
            params.push("category", category);
        }
        if let Some(country) = country.filter(|value| !value.is_empty()) {
            params.push("country", country);
        }
        params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(key, _)| *key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_params_only_carry_auth() {
        let params = QueryParams::simple("asd");
        assert_eq!(params.names(), vec!["format", "userkey"]);
        assert_eq!(params.get("format"), Some("JSON"));
        assert_eq!(params.get("userkey"), Some("asd"));
    }

    #[test]
    fn granularity_params_default_to_all_subdomains() {
        let query = GranularityQuery::new("9-2013", "10-2013", Granularity::Daily);
        let params = QueryParams::granularity("asd", &query);
        assert_eq!(
            params.names(),
            vec!["format", "userkey", "start", "end", "gr", "md"]
        );
        assert_eq!(params.get("start"), Some("9-2013"));
        assert_eq!(params.get("end"), Some("10-2013"));
        assert_eq!(params.get("gr"), Some("daily"));
        assert_eq!(params.get("md"), Some("false"));
    }

    #[test]
    fn granularity_accepts_raw_strings() {
        let query = GranularityQuery::new("3-2015", "4-2015", "fortnightly").with_main_domain(true);
        let params = QueryParams::granularity("asd", &query);
        assert_eq!(params.get("gr"), Some("fortnightly"));
        assert_eq!(params.get("md"), Some("true"));
    }

    #[test]
    fn paged_params_start_at_first_page() {
        let params = QueryParams::paged("asd", &PageQuery::new("9-2013", "10-2013"));
        assert_eq!(
            params.names(),
            vec!["format", "userkey", "start", "end", "page", "md"]
        );
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("md"), Some("false"));

        let query = PageQuery::new("3-2015", "4-2015")
            .with_page(5)
            .with_main_domain(true);
        let params = QueryParams::paged("asd", &query);
        assert_eq!(params.get("page"), Some("5"));
        assert_eq!(params.get("md"), Some("true"));
    }

    #[test]
    fn top_sites_omits_missing_filters() {
        let params = QueryParams::top_sites("asd", None, None);
        assert_eq!(params.names(), vec!["format", "userkey"]);

        let params = QueryParams::top_sites("asd", Some(""), Some("840"));
        assert_eq!(params.names(), vec!["format", "userkey", "country"]);

        let params = QueryParams::top_sites("asd", Some("Arts_and_Entertainment"), Some("840"));
        assert_eq!(params.get("category"), Some("Arts_and_Entertainment"));
        assert_eq!(params.get("country"), Some("840"));
    }

    #[test]
    fn iterates_in_insertion_order() {
        let query = GranularityQuery::new("9-2013", "10-2013", Granularity::Monthly);
        let params = QueryParams::granularity("asd", &query);
        assert_eq!(params.len(), 6);
        assert!(!params.is_empty());
        assert!(QueryParams::default().is_empty());

        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("format", "JSON"),
                ("userkey", "asd"),
                ("start", "9-2013"),
                ("end", "10-2013"),
                ("gr", "monthly"),
                ("md", "false"),
            ]
        );
    }

    #[test]
    fn debug_output_hides_user_key() {
        let params = QueryParams::top_sites("SECRET-KEY", None, Some("840"));
        let rendered = format!("{params:?}");
        assert!(!rendered.contains("SECRET-KEY"), "{rendered}");
        assert_eq!(
            rendered,
            r#"{"format": "JSON", "userkey": "<redacted>", "country": "840"}"#
        );
    }

    #[test]
    fn serializes_as_ordered_pairs() {
        let params = QueryParams::simple("asd");
        let encoded = serde_json::to_value(&params).unwrap();
        assert_eq!(encoded, serde_json::json!([["format", "JSON"], ["userkey", "asd"]]));
    }
}
