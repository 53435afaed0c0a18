//! Define our own macro to simplify the code
//!

/// Call the HTTP client with the proper arguments
///
/// - anonymous call to fetch data
///
macro_rules! http_get {
    ($self:ident, $url:ident) => {
        $self
            .client
            .get(&$url)
            .header(
                "user-agent",
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            )
            .header("accept", "application/json")
            .send()
    };
}
