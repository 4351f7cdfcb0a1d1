pub mod booking_service;
pub mod material_service;
pub mod note_service;
pub mod review_service;
pub mod session_service;
pub mod user_service;
