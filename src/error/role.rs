use sea_orm::DbErr;
use serenity::http::HttpError;
use serenity::model::ModelError;
use thiserror::Error;

/// Outcome of a failed role lookup or role mutation.
///
/// None of these are fatal: callers log or reply with the message and move on to
/// the next member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// The configured marker role does not exist in the guild.
    #[error("Role '{0}' was not found")]
    MissingRole(String),

    /// Discord refused the mutation because the bot lacks permissions.
    #[error("Missing permissions to change roles")]
    PermissionDenied,

    /// Any other failure, carrying its message for logging.
    #[error("{0}")]
    Unclassified(String),
}

/// Classifies Serenity errors.
///
/// HTTP 403 responses and client-side permission checks become
/// `PermissionDenied`; everything else keeps its message as `Unclassified`.
impl From<serenity::Error> for RoleError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
                if response.status_code.as_u16() == 403 =>
            {
                RoleError::PermissionDenied
            }
            serenity::Error::Model(ModelError::InvalidPermissions { .. }) => {
                RoleError::PermissionDenied
            }
            _ => RoleError::Unclassified(err.to_string()),
        }
    }
}

impl From<DbErr> for RoleError {
    fn from(err: DbErr) -> Self {
        RoleError::Unclassified(err.to_string())
    }
}
