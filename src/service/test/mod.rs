use std::collections::HashMap;
use std::sync::Mutex;

use serenity::async_trait;

use crate::{
    bot::gateway::Gateway,
    config::Config,
    error::role::RoleError,
    model::discord::{GuildSnapshot, MemberSnapshot, PresenceStatus, RoleSnapshot},
};


pub const ROLE_NAME: &str = "Sleeper";
pub const ROLE_ID: u64 = 10;
pub const GUILD_ID: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCall {
    Add {
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    },
    Remove {
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    },
}

/// In-memory gateway recording every role mutation.
///
/// Failures can be injected per member for adds and removes.
#[derive(Default)]
pub struct FakeGateway {
    guilds: Vec<GuildSnapshot>,
    add_failures: HashMap<u64, RoleError>,
    remove_failures: HashMap<u64, RoleError>,
    calls: Mutex<Vec<RoleCall>>,
}

impl FakeGateway {
    pub fn new(guilds: Vec<GuildSnapshot>) -> Self {
        Self {
            guilds,
            ..Default::default()
        }
    }

    pub fn fail_add(mut self, member_id: u64, error: RoleError) -> Self {
        self.add_failures.insert(member_id, error);
        self
    }

    pub fn fail_remove(mut self, member_id: u64, error: RoleError) -> Self {
        self.remove_failures.insert(member_id, error);
        self
    }

    pub fn calls(&self) -> Vec<RoleCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added_to(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RoleCall::Add { member_id, .. } => Some(member_id),
                RoleCall::Remove { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    fn guilds(&self) -> Vec<GuildSnapshot> {
        self.guilds.clone()
    }

    fn guild(&self, guild_id: u64) -> Option<GuildSnapshot> {
        self.guilds.iter().find(|guild| guild.id == guild_id).cloned()
    }

    async fn add_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), RoleError> {
        self.calls.lock().unwrap().push(RoleCall::Add {
            guild_id,
            member_id,
            role_id,
        });

        match self.add_failures.get(&member_id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn remove_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), RoleError> {
        self.calls.lock().unwrap().push(RoleCall::Remove {
            guild_id,
            member_id,
            role_id,
        });

        match self.remove_failures.get(&member_id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|name| match name {
        "TOKEN" => Some("test-token".to_string()),
        "INACTIVE_ROLE_NAME" => Some(ROLE_NAME.to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn marker_role(position: u16) -> RoleSnapshot {
    RoleSnapshot {
        id: ROLE_ID,
        name: ROLE_NAME.to_string(),
        position,
    }
}

/// An offline human member without activity or roles.
pub fn offline_member(id: u64, name: &str) -> MemberSnapshot {
    MemberSnapshot {
        id,
        name: name.to_string(),
        nickname: None,
        tag: name.to_string(),
        bot: false,
        status: PresenceStatus::Offline,
        has_activity: false,
        role_ids: Vec::new(),
        can_manage_roles: false,
    }
}

pub fn online_member(id: u64, name: &str) -> MemberSnapshot {
    MemberSnapshot {
        status: PresenceStatus::Online,
        has_activity: true,
        ..offline_member(id, name)
    }
}

pub fn bot_member(id: u64, name: &str) -> MemberSnapshot {
    MemberSnapshot {
        bot: true,
        ..offline_member(id, name)
    }
}

/// A guild with the marker role at position 1 and the bot ranked above it.
pub fn guild(id: u64, members: Vec<MemberSnapshot>) -> GuildSnapshot {
    GuildSnapshot {
        id,
        name: format!("Guild {}", id),
        roles: vec![marker_role(1)],
        members,
        bot_top_role_position: 5,
    }
}

/// A guild without the marker role.
pub fn guild_without_role(id: u64, members: Vec<MemberSnapshot>) -> GuildSnapshot {
    GuildSnapshot {
        roles: Vec::new(),
        ..guild(id, members)
    }
}
