//! Database entities module

pub mod photo;
pub mod timesheet;
pub mod timesheet_workday;
pub mod user;
pub mod workday;
pub mod workday_photo;

pub use photo::Entity as Photo;
pub use timesheet::Entity as TimeSheet;
pub use timesheet_workday::Entity as TimeSheetWorkDay;
pub use user::Entity as User;
pub use workday::Entity as WorkDay;
pub use workday_photo::Entity as WorkDayPhoto;
