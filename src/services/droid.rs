use thirtyfour::{error::WebDriverResult, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::configuration::WebDriverSettings;

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(settings: &WebDriverSettings) -> WebDriverResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }

        let driver = WebDriver::new(&settings.server_url, caps).await?;

        // The session already exists at this point; don't leave it orphaned
        // when the remaining setup fails.
        if let Err(e) = driver.maximize_window().await {
            let _ = driver.quit().await;
            return Err(e);
        }

        Ok(Droid { driver })
    }

    pub async fn quit(self) -> WebDriverResult<()> {
        self.driver.quit().await
    }
}
