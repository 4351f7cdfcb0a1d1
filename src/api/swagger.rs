use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Hub API",
        version = "1.0.0",
        description = "REST API for the collaborative study platform.\n\n**Features:**\n- User registration/login upsert and admin role management\n- Study sessions with an approval workflow (pending, approved, rejected)\n- Bookings and reviews with average ratings\n- Personal notes and tutor materials"
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users & Admin
        crate::api::users::upsert_user,
        crate::api::users::list_users,
        crate::api::users::search_users,
        crate::api::users::update_role,

        // Sessions
        crate::api::sessions::create_session,
        crate::api::sessions::list_sessions,
        crate::api::sessions::get_session,
        crate::api::sessions::tutor_sessions,
        crate::api::sessions::approved_sessions,
        crate::api::sessions::resend_request,

        // Bookings & Reviews
        crate::api::bookings::create_booking,
        crate::api::bookings::list_bookings,
        crate::api::reviews::create_review,
        crate::api::reviews::list_reviews,

        // Notes & Materials
        crate::api::notes::create_note,
        crate::api::notes::list_notes,
        crate::api::notes::update_note,
        crate::api::notes::delete_note,
        crate::api::materials::create_material,
        crate::api::materials::list_materials,
        crate::api::materials::update_material,
        crate::api::materials::delete_material,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::InsertResponse,
            crate::models::UpdateResponse,
            crate::models::DeleteResponse,
            crate::models::UpdateRoleRequest,
            crate::models::UpdateNoteRequest,
            crate::models::UpdateMaterialRequest,
            crate::models::SessionStatus,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health."),
        (name = "Users", description = "Registration/login upsert and user listing."),
        (name = "Admin", description = "User search and role management."),
        (name = "Sessions", description = "Study sessions and their approval workflow."),
        (name = "Bookings", description = "Student bookings."),
        (name = "Reviews", description = "Session reviews, newest first."),
        (name = "Notes", description = "Personal notes scoped by owner email."),
        (name = "Materials", description = "Tutor materials scoped by session or tutor."),
    )
)]
pub struct ApiDoc;
