use serde::Deserialize;

/// `?email=` scope shared by the tutor, student and owner listings
#[derive(Debug, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// `GET /usersForAdmin?search=`
#[derive(Debug, Default, Deserialize)]
pub struct UserSearchQuery {
    pub search: Option<String>,
}
