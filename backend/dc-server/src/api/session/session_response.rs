use dc_core::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserDto,
}
