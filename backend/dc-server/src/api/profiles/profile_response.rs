use dc_core::ProfileDto;

use serde::Serialize;

/// Single profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}
