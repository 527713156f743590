/// Body returned by the health endpoint.
pub const HEALTH_MESSAGE: &str = "Bot is running!";

/// Liveness probe for hosting platforms.
///
/// Always succeeds while the process is up, regardless of the Discord connection.
pub async fn home() -> &'static str {
    HEALTH_MESSAGE
}
