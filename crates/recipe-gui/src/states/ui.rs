use recipe_core::config::BrowserConfig;
use recipe_core::scale::ScaleControl;

/// Widget-level state that has no place in the browser core.
pub struct UIState {
    /// Contents of the scale text field. Kept separately so partial input
    /// ("", "2,") is not overwritten while typing.
    pub scale_text: String,

    /// Where the current recipes came from.
    pub source: String,

    /// Viewport width below which the sidebar becomes an overlay.
    pub narrow_width: f32,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn new(config: &BrowserConfig, scale: &ScaleControl, source: String) -> Self {
        Self {
            scale_text: scale.to_string(),
            source,
            narrow_width: config.sidebar.narrow_width,
            log_messages: Vec::new(),
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Mirror the scale value into the text field after a button or
    /// slider change.
    pub fn sync_scale_text(&mut self, scale: &ScaleControl) {
        self.scale_text = scale.to_string();
    }
}
