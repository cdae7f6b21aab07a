//! Error types for the overlay coordinator

use thiserror::Error;

/// Failure reported by a menu handler from one of its lifecycle calls
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates a handler error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type returned by menu handler lifecycle calls
pub type HandlerResult<T = ()> = Result<T, HandlerError>;

/// Error returned by the coordinator when a handler call fails
///
/// After an `Open` or `Close` failure the handler has already been dropped
/// and the high-frequency listeners released; other failures leave the
/// handler in place.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The handler failed to open against a screen
    #[error("handler '{handler}' failed to open on {screen}")]
    Open {
        handler: &'static str,
        screen: String,
        #[source]
        source: HandlerError,
    },

    /// The handler failed to close
    #[error("handler '{handler}' failed to close")]
    Close {
        handler: &'static str,
        #[source]
        source: HandlerError,
    },

    /// The handler failed during its per-tick update
    #[error("handler '{handler}' failed to update")]
    Update {
        handler: &'static str,
        #[source]
        source: HandlerError,
    },

    /// The handler failed to draw
    #[error("handler '{handler}' failed to draw")]
    Draw {
        handler: &'static str,
        #[source]
        source: HandlerError,
    },

    /// The handler failed while handling an input
    #[error("handler '{handler}' failed to handle input")]
    Input {
        handler: &'static str,
        #[source]
        source: HandlerError,
    },
}

impl OverlayError {
    /// Name of the handler that failed
    pub fn handler(&self) -> &'static str {
        match self {
            OverlayError::Open { handler, .. }
            | OverlayError::Close { handler, .. }
            | OverlayError::Update { handler, .. }
            | OverlayError::Draw { handler, .. }
            | OverlayError::Input { handler, .. } => handler,
        }
    }
}

/// Result type returned by coordinator event entry points
pub type OverlayResult<T = ()> = Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_source_is_chained_not_repeated() {
        let err = OverlayError::Update {
            handler: "InventoryScreen",
            source: HandlerError::new("inventory vanished"),
        };

        assert_eq!(err.to_string(), "handler 'InventoryScreen' failed to update");
        assert_eq!(
            err.source().map(|source| source.to_string()),
            Some("inventory vanished".to_string())
        );
        assert_eq!(err.handler(), "InventoryScreen");
    }

    #[test]
    fn test_open_names_the_screen() {
        let err = OverlayError::Open {
            handler: "ShopScreen",
            screen: "Inventory".to_string(),
            source: HandlerError::new("wrong screen"),
        };
        assert_eq!(
            err.to_string(),
            "handler 'ShopScreen' failed to open on Inventory"
        );
    }
}
