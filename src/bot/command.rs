/// A text command recognised by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `test` - liveness check
    Test,
    /// `list_off` - offline members holding the marker role
    ListOff,
    /// `removerole <member>` - manual removal of the marker role
    RemoveRole(Option<String>),
}

impl Command {
    /// Parses a message into a command.
    ///
    /// Command names are case-sensitive. Everything after the `removerole` name is
    /// taken as the member argument, with surrounding quotes stripped.
    ///
    /// # Arguments
    /// - `prefix` - Command prefix, e.g. `!`
    /// - `content` - Raw message content
    ///
    /// # Returns
    /// - `Some(Command)` - Message is a known command
    /// - `None` - Message is not a command or the command is unknown
    pub fn parse(prefix: &str, content: &str) -> Option<Self> {
        let rest = content.trim().strip_prefix(prefix)?;
        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        match name {
            "test" => Some(Self::Test),
            "list_off" => Some(Self::ListOff),
            "removerole" => {
                let argument = strip_quotes(argument);
                Some(Self::RemoveRole(
                    (!argument.is_empty()).then(|| argument.to_string()),
                ))
            }
            _ => None,
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|quote| {
            value
                .strip_prefix(*quote)
                .and_then(|inner| inner.strip_suffix(*quote))
        })
        .map(str::trim)
        .unwrap_or(value)
}
