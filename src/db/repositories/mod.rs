pub mod cycles;
pub mod dimensions;
pub mod expenses;
pub mod goal_evaluations;
pub mod goals;
pub mod records;
pub mod user_profiles;

pub use cycles::CyclesRepo;
pub use dimensions::DimensionsRepo;
pub use expenses::ExpensesRepo;
pub use goal_evaluations::GoalEvaluationsRepo;
pub use goals::GoalsRepo;
pub use records::RecordsRepo;
pub use user_profiles::UserProfilesRepo;
