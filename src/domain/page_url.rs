use url::Url;

/// Build the page URL for one seed by appending it as a `seed` query pair.
pub fn build_page_url(base_url: &str, seed: u64) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.query_pairs_mut().append_pair("seed", &seed.to_string());
    Ok(url)
}
