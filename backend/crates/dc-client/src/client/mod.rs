pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod forms;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use forms::{EducationForm, ExperienceForm, ProfileForm};
