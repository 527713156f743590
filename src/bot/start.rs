use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Gateway intents the bot subscribes to.
///
/// `GUILD_MEMBERS`, `GUILD_PRESENCES` and `MESSAGE_CONTENT` are privileged intents
/// and must be enabled in the Discord Developer Portal.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `state` - Application state shared with the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    let token = state.config.discord_token.clone();

    let client = Client::builder(&token, intents())
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects the client to Discord and runs it until shutdown.
///
/// Serenity reconnects on its own after transient gateway failures; an error
/// here means the connection could not be established or was rejected.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
