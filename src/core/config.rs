use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub perplexity_api_key: Option<String>,
    pub perplexity_api_hostname: String,
    pub perplexity_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_hostname: String,
    pub gemini_model: String,
    pub youtube_hostname: String,
    pub transcript_language: String,
}

// Treat an empty credential the same as a missing one so a blank
// line in an env file doesn't get sent upstream as a bearer token.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Default for AppConfig {
    fn default() -> Self {
        let perplexity_api_key = optional_env("PERPLEXITY_API_KEY");
        let perplexity_api_hostname = env::var("LEARNPATH_PERPLEXITY_HOST")
            .unwrap_or_else(|_| "https://api.perplexity.ai".to_string());
        let perplexity_model =
            env::var("LEARNPATH_PERPLEXITY_MODEL").unwrap_or_else(|_| "sonar-pro".to_string());
        let gemini_api_key = optional_env("GEMINI_API_KEY");
        let gemini_api_hostname = env::var("LEARNPATH_GEMINI_HOST")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_model =
            env::var("LEARNPATH_GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let youtube_hostname = env::var("LEARNPATH_YOUTUBE_HOST")
            .unwrap_or_else(|_| "https://www.youtube.com".to_string());
        let transcript_language =
            env::var("LEARNPATH_TRANSCRIPT_LANG").unwrap_or_else(|_| "en".to_string());

        Self {
            perplexity_api_key,
            perplexity_api_hostname,
            perplexity_model,
            gemini_api_key,
            gemini_api_hostname,
            gemini_model,
            youtube_hostname,
            transcript_language,
        }
    }
}
