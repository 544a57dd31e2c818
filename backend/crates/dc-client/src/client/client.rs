use crate::{ClientError, ClientResult, EducationForm, ExperienceForm, ProfileForm};

use dc_core::{FieldError, ProfileDto, RepoSummary, UserDto};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP client for the dc-server REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Deserialize)]
struct SessionBody {
    user: UserDto,
}

#[derive(Deserialize)]
struct ProfileBody {
    profile: ProfileDto,
}

#[derive(Deserialize)]
struct ProfileListBody {
    profiles: Vec<ProfileDto>,
}

#[derive(Deserialize)]
struct RepoListBody {
    repos: Vec<RepoSummary>,
}

#[derive(Deserialize)]
struct DeleteBody {
    deleted_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Session token sent as `Authorization: Bearer`
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    pub fn set_token(&mut self, token: Option<&str>) {
        self.token = token.map(String::from);
    }

    /// Build a request with the bearer token, if any
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/api/v1{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request, decoding either the success body or the error envelope
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let (code, message, errors) = match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
                Ok(ErrorEnvelope { error }) => (error.code, error.message, error.errors),
                Err(_) => (
                    "UNKNOWN".to_string(),
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                    Vec::new(),
                ),
            };

            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                errors,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(method, path).json(body)).await
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// The user the current token belongs to
    pub async fn load_user(&self) -> ClientResult<UserDto> {
        let body: SessionBody = self.execute(self.request(Method::GET, "/session")).await?;
        Ok(body.user)
    }

    /// Create an account; returns its session token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let res: TokenBody = self.send_json(Method::POST, "/identities", &body).await?;
        Ok(res.token)
    }

    /// Exchange credentials for a session token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let res: TokenBody = self.send_json(Method::POST, "/session", &body).await?;
        Ok(res.token)
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    pub async fn get_current_profile(&self) -> ClientResult<ProfileDto> {
        let body: ProfileBody = self.execute(self.request(Method::GET, "/profiles/me")).await?;
        Ok(body.profile)
    }

    pub async fn get_profiles(&self) -> ClientResult<Vec<ProfileDto>> {
        let body: ProfileListBody = self.execute(self.request(Method::GET, "/profiles")).await?;
        Ok(body.profiles)
    }

    pub async fn get_profile_by_owner(&self, owner_id: &str) -> ClientResult<ProfileDto> {
        let req = self.request(Method::GET, &format!("/profiles/by-owner/{}", owner_id));
        let body: ProfileBody = self.execute(req).await?;
        Ok(body.profile)
    }

    /// Create or sparsely update the caller's profile
    pub async fn upsert_profile(&self, form: &ProfileForm) -> ClientResult<ProfileDto> {
        let body: ProfileBody = self.send_json(Method::POST, "/profiles", form).await?;
        Ok(body.profile)
    }

    /// Delete the caller's profile and account; returns the deleted user id
    pub async fn delete_account(&self) -> ClientResult<String> {
        let body: DeleteBody = self.execute(self.request(Method::DELETE, "/profiles")).await?;
        Ok(body.deleted_id)
    }

    pub async fn add_experience(&self, form: &ExperienceForm) -> ClientResult<ProfileDto> {
        let body: ProfileBody = self
            .send_json(Method::PUT, "/profiles/experience", form)
            .await?;
        Ok(body.profile)
    }

    pub async fn delete_experience(&self, id: &str) -> ClientResult<ProfileDto> {
        let req = self.request(Method::DELETE, &format!("/profiles/experience/{}", id));
        let body: ProfileBody = self.execute(req).await?;
        Ok(body.profile)
    }

    pub async fn add_education(&self, form: &EducationForm) -> ClientResult<ProfileDto> {
        let body: ProfileBody = self
            .send_json(Method::PUT, "/profiles/education", form)
            .await?;
        Ok(body.profile)
    }

    pub async fn delete_education(&self, id: &str) -> ClientResult<ProfileDto> {
        let req = self.request(Method::DELETE, &format!("/profiles/education/{}", id));
        let body: ProfileBody = self.execute(req).await?;
        Ok(body.profile)
    }

    // =========================================================================
    // GitHub
    // =========================================================================

    pub async fn get_github_repos(&self, handle: &str) -> ClientResult<Vec<RepoSummary>> {
        let req = self.request(Method::GET, &format!("/profiles/github/{}", handle));
        let body: RepoListBody = self.execute(req).await?;
        Ok(body.repos)
    }
}
