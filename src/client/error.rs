//! Client-side error type.

/// Failure of a GraphQL request issued by the booking client.
///
/// Status failures are deliberately unclassified: any status other than
/// 200 or 201 becomes [`ClientError::RequestFailed`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a status other than 200/201.
    #[error("request failed with status {0}")]
    RequestFailed(u16),

    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response carried GraphQL errors and no usable data.
    #[error("graphql errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// The `data` envelope did not contain the expected field.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    /// The body or the extracted field did not match the expected shape.
    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_are_joined() {
        let err = ClientError::Graphql(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "graphql errors: first; second");
    }

    #[test]
    fn request_failed_reports_status() {
        assert_eq!(
            ClientError::RequestFailed(500).to_string(),
            "request failed with status 500"
        );
    }
}
