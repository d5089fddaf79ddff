use crate::messages::MessageId;
use crate::utils::escape_html;
use thiserror::Error;

/// One violated tag parameter rule. Each variant carries the offending value
/// as the author wrote it (after defaulting and `px` stripping).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing latitude")]
    LatMissing,
    #[error("latitude '{value}' is not a number")]
    LatNotANumber { value: String },
    #[error("latitude {value} is below -90")]
    LatTooSmall { value: String },
    #[error("latitude {value} is above 90")]
    LatTooBig { value: String },

    #[error("missing longitude")]
    LonMissing,
    #[error("longitude '{value}' is not a number")]
    LonNotANumber { value: String },
    #[error("longitude {value} is below -180")]
    LonTooSmall { value: String },
    #[error("longitude {value} is above 180")]
    LonTooBig { value: String },

    #[error("missing zoom")]
    ZoomMissing,
    #[error("zoom '{value}' is not a number")]
    ZoomNotANumber { value: String },
    #[error("zoom {value} is below 0")]
    ZoomTooSmall { value: String },
    #[error("zoom level 18 is not supported")]
    Zoom18 { value: String },
    #[error("zoom {value} is above 18")]
    ZoomTooBig { value: String },

    #[error("width '{value}' is not a number")]
    WidthNotANumber { value: String },
    #[error("width {value} is below 100")]
    WidthTooSmall { value: String },
    #[error("width {value} is above 1000")]
    WidthTooBig { value: String },

    #[error("height '{value}' is not a number")]
    HeightNotANumber { value: String },
    #[error("height {value} is below 100")]
    HeightTooSmall { value: String },
    #[error("height {value} is above 1000")]
    HeightTooBig { value: String },

    #[error("invalid layer '{layer}'")]
    InvalidLayer { layer: String },

    #[error("the marker parameter is no longer supported")]
    UnsupportedMarker,

    #[error("pipe-separated tag contents are no longer supported")]
    UnsupportedOldContents,

    #[error("KML tag contents are no longer supported")]
    UnsupportedKmlContents,
}

impl ValidationError {
    pub fn message_id(&self) -> MessageId {
        use ValidationError::*;
        match self {
            LatMissing => MessageId::LatMissing,
            LatNotANumber { .. } => MessageId::LatNan,
            LatTooSmall { .. } => MessageId::LatSmall,
            LatTooBig { .. } => MessageId::LatBig,
            LonMissing => MessageId::LonMissing,
            LonNotANumber { .. } => MessageId::LonNan,
            LonTooSmall { .. } => MessageId::LonSmall,
            LonTooBig { .. } => MessageId::LonBig,
            ZoomMissing => MessageId::ZoomMissing,
            ZoomNotANumber { .. } => MessageId::ZoomNan,
            ZoomTooSmall { .. } => MessageId::ZoomSmall,
            Zoom18 { .. } => MessageId::Zoom18,
            ZoomTooBig { .. } => MessageId::ZoomBig,
            WidthNotANumber { .. } => MessageId::WidthNan,
            WidthTooSmall { .. } => MessageId::WidthSmall,
            WidthTooBig { .. } => MessageId::WidthBig,
            HeightNotANumber { .. } => MessageId::HeightNan,
            HeightTooSmall { .. } => MessageId::HeightSmall,
            HeightTooBig { .. } => MessageId::HeightBig,
            InvalidLayer { .. } => MessageId::InvalidLayer,
            UnsupportedMarker => MessageId::UnsupportedMarker,
            UnsupportedOldContents => MessageId::UnsupportedOldContents,
            UnsupportedKmlContents => MessageId::UnsupportedKmlContents,
        }
    }

    /// The `$1` argument for the localized message, already safe for HTML.
    /// Values that failed the numeric check are escaped; range failures
    /// carry a number and go through as written.
    pub fn message_arg(&self) -> Option<String> {
        use ValidationError::*;
        match self {
            LatNotANumber { value }
            | LonNotANumber { value }
            | ZoomNotANumber { value }
            | WidthNotANumber { value }
            | HeightNotANumber { value } => Some(escape_html(value)),
            InvalidLayer { layer } => Some(escape_html(layer)),
            LatTooSmall { value }
            | LatTooBig { value }
            | LonTooSmall { value }
            | LonTooBig { value }
            | ZoomTooSmall { value }
            | Zoom18 { value }
            | ZoomTooBig { value }
            | WidthTooSmall { value }
            | WidthTooBig { value }
            | HeightTooSmall { value }
            | HeightTooBig { value } => Some(value.clone()),
            LatMissing | LonMissing | ZoomMissing | UnsupportedMarker
            | UnsupportedOldContents | UnsupportedKmlContents => None,
        }
    }
}
