use anyhow::Result;
use opencv::{core::Mat, highgui};

const WINDOW_NAME: &str = "Frame";
const ESCAPE: i32 = 27;

/// Live display window; does nothing in headless mode
pub struct Viewer {
    headless: bool,
    window_open: bool,
}

impl Viewer {
    pub fn new(headless: bool) -> Self {
        Self {
            headless,
            window_open: false,
        }
    }

    /// Shows a frame in the display window
    pub fn imshow(&mut self, frame: &Mat) -> Result<()> {
        if self.headless {
            return Ok(());
        }
        highgui::imshow(WINDOW_NAME, frame)?;
        self.window_open = true;
        Ok(())
    }

    /// Polls the keyboard for `delay_ms` and reports whether Escape was pressed
    pub fn escape_pressed(&self, delay_ms: i32) -> Result<bool> {
        if self.headless {
            return Ok(false);
        }
        let key = highgui::wait_key(delay_ms)?;
        Ok(key & 0xFF == ESCAPE)
    }

    /// Closes any window this viewer opened
    pub fn close(&mut self) -> Result<()> {
        if self.window_open {
            highgui::destroy_all_windows()?;
            self.window_open = false;
        }
        Ok(())
    }
}
