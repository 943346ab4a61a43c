pub mod classes;
pub mod step1;
pub mod step2;
pub mod wizard;

pub use wizard::TrainerWizard;
