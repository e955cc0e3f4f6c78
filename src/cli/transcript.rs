use anyhow::Result;

use crate::core::AppConfig;
use crate::youtube::{YoutubeTranscriptFetcher, fetch_transcript};

pub async fn run(url: &str) -> Result<()> {
    let config = AppConfig::default();
    let fetcher =
        YoutubeTranscriptFetcher::new(&config.youtube_hostname, &config.transcript_language);
    let transcript = fetch_transcript(&fetcher, url).await?;
    println!("{}", serde_json::to_string_pretty(&transcript)?);
    Ok(())
}
