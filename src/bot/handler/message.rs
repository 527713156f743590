//! Text command dispatch.

use serenity::all::{Context, Message};

use crate::{
    bot::{
        command::Command,
        gateway::{Gateway, SerenityGateway},
    },
    service::command::CommandService,
    state::AppState,
};

/// Maximum length of a single Discord message in characters.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Handle message creation in a channel
///
/// Messages from bots and direct messages are ignored. Recognised commands are
/// answered in the channel they were sent in.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(command) = Command::parse(&state.config.command_prefix, &message.content) else {
        return;
    };

    tracing::debug!(
        "Command {:?} from {} in guild {}",
        command,
        message.author.name,
        guild_id
    );

    let gateway = SerenityGateway::new(ctx.cache.clone(), ctx.http.clone());
    let reply = run_command(
        state,
        &gateway,
        guild_id.get(),
        message.author.id.get(),
        command,
    )
    .await;

    for chunk in split_message(&reply, MAX_MESSAGE_LENGTH) {
        if let Err(e) = message.channel_id.say(&ctx.http, chunk).await {
            tracing::error!(
                "Failed to reply in channel {}: {}",
                message.channel_id,
                e
            );
            break;
        }
    }
}

/// Runs a parsed command and returns the reply text.
///
/// # Arguments
/// - `state` - Application state
/// - `gateway` - Source of the guild snapshot and role mutations
/// - `guild_id` - Guild the command was sent in
/// - `invoker_id` - User who sent the command
/// - `command` - The parsed command
pub async fn run_command(
    state: &AppState,
    gateway: &dyn Gateway,
    guild_id: u64,
    invoker_id: u64,
    command: Command,
) -> String {
    let service = CommandService::new(&state.db, gateway, &state.config);

    if command == Command::Test {
        return service.ping();
    }

    let Some(guild) = gateway.guild(guild_id) else {
        return "⚠️ This server is not available yet, try again shortly.".to_string();
    };

    match command {
        Command::Test => service.ping(),
        Command::ListOff => service.list_offline(&guild),
        Command::RemoveRole(Some(target)) => {
            service.remove_marker(&guild, invoker_id, &target).await
        }
        Command::RemoveRole(None) => format!(
            "⚠️ Usage: {}removerole <member>",
            state.config.command_prefix
        ),
    }
}

/// Splits a reply into chunks Discord accepts.
///
/// Splits on line boundaries where possible; lines longer than `max_len` are cut.
/// Blank chunks are dropped.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut started = false;

    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        let pieces: Vec<String> = if chars.is_empty() {
            vec![String::new()]
        } else {
            chars
                .chunks(max_len.max(1))
                .map(|piece| piece.iter().collect())
                .collect()
        };

        for piece in pieces {
            let piece_len = piece.chars().count();

            if started && current_len + 1 + piece_len > max_len {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
                started = false;
            }

            if started {
                current.push('\n');
                current_len += 1;
            }

            current.push_str(&piece);
            current_len += piece_len;
            started = true;
        }
    }

    if started {
        chunks.push(current);
    }

    chunks.retain(|chunk| !chunk.trim().is_empty());
    chunks
}
