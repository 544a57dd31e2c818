use dc_core::ProfileDto;

use serde::Serialize;

/// List of profiles response
#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<ProfileDto>,
}
