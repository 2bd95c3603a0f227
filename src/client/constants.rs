use crate::client::endpoint::{ApiVersion, Endpoint};

pub(crate) const DEFAULT_API_HOST: &str = "api.similarweb.com";
pub(crate) const RESPONSE_FORMAT: &str = "JSON";
pub(crate) const ADULT_CATEGORY: &str = "Adult";

pub(crate) const API_KEY_ENV: &str = "SIMILARWEB_API_KEY";
pub(crate) const API_HOST_ENV: &str = "SIMILARWEB_API_HOST";
pub(crate) const USE_HTTPS_ENV: &str = "SIMILARWEB_USE_HTTPS";

pub(crate) const VISITS: Endpoint = Endpoint::new(ApiVersion::V1, "visits");
pub(crate) const TRAFFIC: Endpoint = Endpoint::new(ApiVersion::V1, "traffic");
pub(crate) const PAGE_VIEWS: Endpoint = Endpoint::new(ApiVersion::V1, "pageviews");
pub(crate) const VISIT_DURATION: Endpoint = Endpoint::new(ApiVersion::V1, "visitduration");
pub(crate) const BOUNCE_RATE: Endpoint = Endpoint::new(ApiVersion::V1, "bouncerate");
pub(crate) const SIMILAR_SITES: Endpoint = Endpoint::new(ApiVersion::V2, "similarsites");
pub(crate) const ALSO_VISITED: Endpoint = Endpoint::new(ApiVersion::V2, "alsovisited");
pub(crate) const TAGS: Endpoint = Endpoint::new(ApiVersion::V2, "tags");
pub(crate) const CATEGORY: Endpoint = Endpoint::new(ApiVersion::V2, "category");
pub(crate) const CATEGORY_RANK: Endpoint = Endpoint::new(ApiVersion::V2, "categoryrank");
pub(crate) const TOP_SITES: Endpoint = Endpoint::new(ApiVersion::V1, "topsites");
pub(crate) const SOCIAL_REFERRING_SITES: Endpoint =
    Endpoint::new(ApiVersion::V1, "socialreferringsites");
pub(crate) const ORGANIC_SEARCH: Endpoint = Endpoint::new(ApiVersion::V1, "orgsearch");
pub(crate) const PAID_SEARCH: Endpoint = Endpoint::new(ApiVersion::V1, "paidsearch");
pub(crate) const LEADING_DESTINATION_SITES: Endpoint =
    Endpoint::new(ApiVersion::V2, "leadingdestinationsites");
pub(crate) const REFERRALS: Endpoint = Endpoint::new(ApiVersion::V1, "referrals");
pub(crate) const ORGANIC_KEYWORD_COMPETITORS: Endpoint =
    Endpoint::new(ApiVersion::V1, "orgkwcompetitor");
pub(crate) const PAID_KEYWORD_COMPETITORS: Endpoint =
    Endpoint::new(ApiVersion::V1, "paidkwcompetitor");
