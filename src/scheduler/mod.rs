pub mod inactivity_check;
