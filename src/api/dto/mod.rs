//! API DTOs

pub mod common;
pub mod timesheet;
pub mod user;
pub mod workday;

pub use common::ApiResponse;
pub use timesheet::{OverviewEntryDto, SaveTimeSheetRequest, TimeSheetDraftDto, TimeSheetDto};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, UserDto};
pub use workday::{
    parse_time_of_day, AttachPhotoRequest, EditWorkDayRequest, PhotoDto, SetNotesRequest,
    StatusResponse, WorkDayDto,
};
