//! Lists the top sites for a category and country without an async runtime.

use similarweb_rs_sdk::blocking::SimilarWebClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SimilarWebClient::new("your-api-key")?;

    match client.top_sites(Some("Arts_and_Entertainment"), Some("840")) {
        Ok(sites) => println!("{sites:#}"),
        Err(err) => match err.status() {
            Some(status) => eprintln!("API rejected the request ({status}): {:?}", err.body()),
            None => return Err(err.into()),
        },
    }

    Ok(())
}
