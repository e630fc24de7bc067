/// Display constants for the application
pub struct Config;

impl Config {
    /// Embedded player height in the gallery grid (pixels)
    pub const GALLERY_EMBED_HEIGHT: u32 = 200;

    /// Embedded player height in the detail modal (pixels)
    pub const MODAL_EMBED_HEIGHT: u32 = 350;
}
