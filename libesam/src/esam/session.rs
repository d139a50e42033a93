// libesam-rs/libesam/src/esam/session.rs

/// Result of session key negotiation: the ESAM's session data (first 48
/// bytes of the reply) and its signature (the rest), both as hex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionKey {
    pub(crate) session_data: String,
    pub(crate) signature: String,
}

impl SessionKey {
    pub fn session_data(&self) -> &str {
        &self.session_data
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_parts(self) -> (String, String) {
        (self.session_data, self.signature)
    }
}
