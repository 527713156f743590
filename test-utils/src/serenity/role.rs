//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with zero permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: u16) -> Role {
    create_test_role_with_permissions(role_id, name, color, position, 0)
}

/// Creates a test Serenity Role carrying the given permission bits.
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role_with_permissions;
///
/// let moderator = create_test_role_with_permissions(
///     123456789,
///     "Moderator",
///     0,
///     5,
///     Permissions::MANAGE_ROLES.bits(),
/// );
/// assert!(moderator.permissions.manage_roles());
/// ```
pub fn create_test_role_with_permissions(
    role_id: u64,
    name: &str,
    color: u32,
    position: u16,
    permissions: u64,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
