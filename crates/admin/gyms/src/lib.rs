pub mod list;
pub mod step1;
pub mod step2;
pub mod wizard;

pub use list::GymList;
pub use wizard::GymWizard;
