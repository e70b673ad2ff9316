use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_START_URL: &str = "https://www.bakedeco.com/nav/brand.asp?pagestart=1&categoryID=0&price=0&manufacid=551&sortby=&clearance=0&va=1";

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub start_url: String,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: usize,
    pub site: SiteConfig,
}

/// Where product links live on the listing page and how to make them absolute.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: String,
    /// Class-name fragment of the container that holds the product anchors.
    pub listing_container: String,
    /// Path fragment that only detail-page links carry.
    pub detail_marker: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            output_dir: PathBuf::from("results"),
            file_name: "Bakedeco_Silikomart_Final.csv".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            site: SiteConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.bakedeco.com/".to_string(),
            listing_container: "prd_list_mid".to_string(),
            detail_marker: "detail.asp".to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_results_folder() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.output_path(),
            PathBuf::from("results").join("Bakedeco_Silikomart_Final.csv")
        );
        assert!(config.start_url.contains("manufacid=551"));
        assert_eq!(config.site.detail_marker, "detail.asp");
    }
}
