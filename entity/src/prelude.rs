pub use super::inactivity::Entity as Inactivity;
