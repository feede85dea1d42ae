use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("contact details can only be submitted after the last question")]
    NotCapturing,

    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("download failed: {0}")]
    Download(String),
}

impl LeadError {
    /// Message shown to the visitor. Details stay in the console log.
    pub fn user_message(&self) -> &'static str {
        match self {
            LeadError::MissingField("name") => "Please enter your name.",
            LeadError::MissingField(_) => "Please enter your email address.",
            _ => "Something went wrong sending your details. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_get_the_generic_message() {
        assert_eq!(
            LeadError::Status(502).user_message(),
            "Something went wrong sending your details. Please try again."
        );
        assert_eq!(LeadError::MissingField("name").user_message(), "Please enter your name.");
        assert_eq!(LeadError::Status(500).to_string(), "server responded with status 500");
    }
}
