use crate::{ExecutionMode, LifeError, Result};
use std::{path::PathBuf, time::Duration};

/// Everything the driver needs to set up and run a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Side of one cell in pixels.
    pub cell_resolution: u32,
    /// Explicit number of columns, otherwise derived from `width`.
    pub cols: Option<usize>,
    /// Explicit number of rows, otherwise derived from `height`.
    pub rows: Option<usize>,
    /// Generations (and frames) per second.
    pub fps: f64,
    pub seed: Option<u64>,
    /// RLE file with the initial pattern instead of a random field.
    pub pattern: Option<PathBuf>,
    pub mode: ExecutionMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            cell_resolution: 10,
            cols: None,
            rows: None,
            fps: 12.,
            seed: None,
            pattern: None,
            mode: ExecutionMode::Serial,
        }
    }
}

impl Settings {
    /// Grid size as `(cols, rows)`.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        if self.cell_resolution == 0 {
            return Err(LifeError::Configuration(
                "cell resolution must be positive".to_string(),
            ));
        }
        let res = self.cell_resolution as usize;
        let cols = self.cols.unwrap_or(self.width as usize / res);
        let rows = self.rows.unwrap_or(self.height as usize / res);
        if cols == 0 || rows == 0 {
            return Err(LifeError::Configuration(format!(
                "a {}x{} window with {res}px cells holds no cells",
                self.width, self.height
            )));
        }
        Ok((cols, rows))
    }

    /// Size of the drawn field in pixels.
    pub fn field_size_px(&self) -> Result<(f32, f32)> {
        let (cols, rows) = self.dimensions()?;
        let res = self.cell_resolution as f32;
        Ok((cols as f32 * res, rows as f32 * res))
    }

    /// Time budget of one frame, `1 / fps`.
    ///
    /// Rejects rates whose frame time is zero or does not fit in a `Duration`.
    pub fn frame_time(&self) -> Result<Duration> {
        // negative, zero and NaN rates all map to values `Duration` refuses
        match Duration::try_from_secs_f64(1. / self.fps) {
            Ok(frame_time) if !frame_time.is_zero() => Ok(frame_time),
            _ => Err(LifeError::Configuration(format!(
                "unsupported fps {}",
                self.fps
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.frame_time()?;
        self.dimensions().map(|_| ())
    }
}
