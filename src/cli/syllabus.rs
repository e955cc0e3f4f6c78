use anyhow::Result;

use crate::ai::generate_syllabus;
use crate::core::AppConfig;

pub async fn run(topic: &str) -> Result<()> {
    let config = AppConfig::default();
    let syllabus = generate_syllabus(
        topic,
        &config.perplexity_api_hostname,
        config.perplexity_api_key.as_deref(),
        &config.perplexity_model,
    )
    .await?;
    println!("{}", serde_json::to_string_pretty(&syllabus)?);
    Ok(())
}
