use lumen_core::{ColorError, ColorSpace};

use crate::channel::Channel;

/// Errors that can occur while editing a color value.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("{space} colors have no {channel} channel")]
    ChannelNotInSpace { channel: Channel, space: ColorSpace },

    #[error("unknown channel name: {0}")]
    UnknownChannel(String),

    #[error("HDR intensity needs a linear color, value is {0}")]
    NotLinear(ColorSpace),

    #[error(transparent)]
    Color(#[from] ColorError),
}
