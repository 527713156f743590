//! Owned snapshots of Discord guild state.
//!
//! The Serenity cache hands out guards that cannot be held across `.await` points, so
//! the gateway copies what the bot needs into these plain structs before any role
//! mutation happens. Services only ever see snapshots, which also lets tests build
//! guild state by hand.

/// Presence status of a member as seen by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    /// Offline or invisible. Members without a cached presence are reported offline.
    Offline,
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSnapshot {
    pub id: u64,
    pub name: String,
    /// Position in the role hierarchy (higher = more important).
    pub position: u16,
}

/// A guild member together with their current presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    pub id: u64,
    /// Discord username.
    pub name: String,
    /// Guild-specific nickname.
    pub nickname: Option<String>,
    /// `name` or `name#discriminator` for legacy accounts.
    pub tag: String,
    /// Automated (bot) account.
    pub bot: bool,
    pub status: PresenceStatus,
    /// Whether the member currently shows any activity (game, custom status, etc.).
    pub has_activity: bool,
    pub role_ids: Vec<u64>,
    /// Owner, administrator, or holder of the Manage Roles permission.
    pub can_manage_roles: bool,
}

impl MemberSnapshot {
    pub fn is_offline(&self) -> bool {
        self.status == PresenceStatus::Offline
    }

    /// Offline with no activity signal at all.
    pub fn is_inactive(&self) -> bool {
        !self.has_activity && self.is_offline()
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

/// A guild the bot is a member of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSnapshot {
    pub id: u64,
    pub name: String,
    pub roles: Vec<RoleSnapshot>,
    pub members: Vec<MemberSnapshot>,
    /// Position of the bot's highest role, `0` when it only has `@everyone`.
    pub bot_top_role_position: u16,
}

impl GuildSnapshot {
    /// Finds a role by exact name.
    pub fn role_by_name(&self, name: &str) -> Option<&RoleSnapshot> {
        self.roles.iter().find(|role| role.name == name)
    }

    pub fn member(&self, member_id: u64) -> Option<&MemberSnapshot> {
        self.members.iter().find(|member| member.id == member_id)
    }

    /// Human (non-bot) members.
    pub fn humans(&self) -> impl Iterator<Item = &MemberSnapshot> {
        self.members.iter().filter(|member| !member.bot)
    }

    pub fn members_with_role(&self, role_id: u64) -> impl Iterator<Item = &MemberSnapshot> {
        self.members
            .iter()
            .filter(move |member| member.has_role(role_id))
    }

    /// Whether the bot may add or remove `role`.
    ///
    /// Discord only allows managing roles strictly below the bot's highest role.
    pub fn bot_outranks(&self, role: &RoleSnapshot) -> bool {
        role.position < self.bot_top_role_position
    }

    /// Resolves a member from command input.
    ///
    /// Accepts a mention (`<@id>` or `<@!id>`), a raw ID, or an exact tag, username,
    /// or nickname, in that order.
    pub fn find_member(&self, query: &str) -> Option<&MemberSnapshot> {
        let query = query.trim();

        if let Some(id) = parse_member_mention(query) {
            return self.member(id);
        }

        self.members
            .iter()
            .find(|member| member.tag == query)
            .or_else(|| self.members.iter().find(|member| member.name == query))
            .or_else(|| {
                self.members
                    .iter()
                    .find(|member| member.nickname.as_deref() == Some(query))
            })
    }
}

/// Parses a user mention or a raw user ID.
pub fn parse_member_mention(value: &str) -> Option<u64> {
    let id = value
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|rest| rest.strip_prefix('!').unwrap_or(rest))
        .unwrap_or(value);

    id.parse::<u64>().ok().filter(|id| *id != 0)
}
