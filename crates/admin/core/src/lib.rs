pub mod debounce;
pub mod input;
pub mod list;
pub mod notify;
pub mod reconcile;
pub mod rules;
pub mod wizard;
