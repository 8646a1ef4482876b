use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::prelude::*;
use url::Url;

use crate::{
    configuration::{ScrapeSettings, WebDriverSettings},
    domain::{build_page_url, sum_table_cells, PageResult},
    services::Droid,
};

/// One rendered page per call: navigate, wait for a table, return the page
/// source. Lets the seed loop run against a fake in tests.
#[async_trait]
pub trait PageFetcher {
    async fn fetch_page(&self, url: &Url) -> anyhow::Result<String>;
}

pub struct DriverPageFetcher<'a> {
    driver: &'a WebDriver,
    wait_timeout: Duration,
}

#[async_trait]
impl PageFetcher for DriverPageFetcher<'_> {
    async fn fetch_page(&self, url: &Url) -> anyhow::Result<String> {
        self.driver.goto(url.as_str()).await?;

        // Tables are rendered client-side, wait for the first one to appear.
        self.driver
            .query(By::Tag("table"))
            .wait(self.wait_timeout, Duration::from_millis(100))
            .first()
            .await?;

        Ok(self.driver.source().await?)
    }
}

/// Drive one browser session over the configured seed list and return the
/// grand total of all page sums. The session is released on every exit
/// path, including a failed page.
pub async fn run_aggregation(
    webdriver_settings: &WebDriverSettings,
    scrape_settings: &ScrapeSettings,
) -> anyhow::Result<f64> {
    let droid = Droid::new(webdriver_settings).await?;
    log::info!(
        "Started browser session against {}",
        webdriver_settings.server_url
    );

    let fetcher = DriverPageFetcher {
        driver: &droid.driver,
        wait_timeout: Duration::from_secs(scrape_settings.wait_timeout_secs),
    };
    let result = aggregate_pages(&fetcher, scrape_settings).await;

    let quit_result = droid.quit().await;
    let grand_total = result?;
    quit_result?;

    Ok(grand_total)
}

async fn aggregate_pages<F: PageFetcher>(
    fetcher: &F,
    settings: &ScrapeSettings,
) -> anyhow::Result<f64> {
    let mut grand_total = 0.0;

    for &seed in &settings.seeds {
        let url = build_page_url(&settings.base_url, seed)?;
        log::info!("Processing seed {} | {}", seed, url);

        let page_source = fetcher.fetch_page(&url).await?;
        let page = PageResult {
            seed,
            sum: sum_table_cells(&page_source),
        };

        println!("Seed {} sum: {}", page.seed, page.sum);
        grand_total += page.sum;
    }

    Ok(grand_total)
}
