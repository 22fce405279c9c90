pub mod student;

pub use student::Entity as Student;
pub use student::StudentSummary;
