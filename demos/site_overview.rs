//! Pulls a handful of metrics for one domain with the async client.
//! Export `SIMILARWEB_API_KEY` before running.

use similarweb_rs_sdk::client::{
    ClientConfig, Granularity, GranularityQuery, PageQuery, SimilarWebClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SimilarWebClient::with_config(ClientConfig::from_env()?)?;
    let domain = "example.com";

    let query = GranularityQuery::new("9-2013", "10-2013", Granularity::Weekly);
    let visits = client.visits(domain, &query).await?;
    println!("visits: {visits}");

    println!("category: {}", client.category(domain).await?);
    println!("adult: {}", client.adult(domain).await?);

    // Second page of referring sites, root domain only.
    let referrals = client
        .referrals(
            domain,
            &PageQuery::new("9-2013", "10-2013")
                .with_page(2)
                .with_main_domain(true),
        )
        .await?;
    println!("referrals: {referrals}");

    Ok(())
}
