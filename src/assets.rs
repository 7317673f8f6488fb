use iced::widget::image;

/// The closed set of bundled thumbnail images.
///
/// Every thumbnail the catalog may reference is a variant here, with its
/// PNG bytes embedded at compile time. A catalog entry naming a file that
/// is not in this set is rejected when the catalog loads, so a missing
/// asset can never reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail {
    Gloves,
    Sandals,
    Socks,
}

impl Thumbnail {
    /// Look up a thumbnail by the filename used in the catalog document.
    /// Returns `None` for filenames outside the bundled set.
    pub fn from_ref(filename: &str) -> Option<Self> {
        match filename {
            "gloves.png" => Some(Thumbnail::Gloves),
            "sandals.png" => Some(Thumbnail::Sandals),
            "socks.png" => Some(Thumbnail::Socks),
            _ => None,
        }
    }

    /// The embedded PNG data for this thumbnail.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Thumbnail::Gloves => include_bytes!("../assets/thumbnails/gloves.png"),
            Thumbnail::Sandals => include_bytes!("../assets/thumbnails/sandals.png"),
            Thumbnail::Socks => include_bytes!("../assets/thumbnails/socks.png"),
        }
    }

    /// An image handle for the iced image widget.
    pub fn handle(self) -> image::Handle {
        image::Handle::from_bytes(self.bytes())
    }
}
