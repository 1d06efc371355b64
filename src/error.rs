use thiserror::Error;

/// Failures that can stop the page server from starting or keep it from serving.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_bind_error_keeps_source() {
        let err = SiteError::Bind {
            addr: "0.0.0.0:3000".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "couldn't bind 0.0.0.0:3000");
        assert_eq!(err.source().map(|s| s.to_string()), Some("in use".to_string()));
    }

    #[test]
    fn test_config_error_message() {
        let err = SiteError::Config("missing Cargo.toml".to_string());
        assert_eq!(
            err.to_string(),
            "couldn't load leptos configuration: missing Cargo.toml"
        );
    }
}
