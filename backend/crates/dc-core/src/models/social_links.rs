use serde::{Deserialize, Serialize};

/// Links to the owner's accounts on other networks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl SocialLinks {
    /// Overwrite each link that is present and non-empty in `patch`, leaving
    /// the others untouched
    pub fn merge(&mut self, patch: SocialLinks) {
        for (slot, value) in [
            (&mut self.youtube, patch.youtube),
            (&mut self.twitter, patch.twitter),
            (&mut self.facebook, patch.facebook),
            (&mut self.linkedin, patch.linkedin),
            (&mut self.instagram, patch.instagram),
        ] {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                *slot = Some(v);
            }
        }
    }
}
