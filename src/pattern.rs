use crate::{LifeError, Result};

/// A finite arrangement of live cells inside a `width x height` bounding box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    live: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(width: usize, height: usize, live: Vec<(usize, usize)>) -> Result<Self> {
        if let Some(&(x, y)) = live.iter().find(|&&(x, y)| x >= width || y >= height) {
            return Err(LifeError::Configuration(format!(
                "cell ({x}, {y}) is outside of the {width}x{height} pattern"
            )));
        }
        Ok(Self {
            width,
            height,
            live,
        })
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self {
            width: 2,
            height: 2,
            live: vec![(0, 0), (1, 0), (0, 1), (1, 1)],
        }
    }

    /// Period 2 oscillator in its horizontal phase.
    pub fn blinker() -> Self {
        Self {
            width: 3,
            height: 1,
            live: vec![(0, 0), (1, 0), (2, 0)],
        }
    }

    /// Spaceship moving by (+1, +1) every 4 generations.
    pub fn glider() -> Self {
        Self {
            width: 3,
            height: 3,
            live: vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn live_cells(&self) -> &[(usize, usize)] {
        &self.live
    }

    /// Parses a pattern in RLE format.
    ///
    /// Comment lines start with `#`. The header line `x = W, y = H[, rule = ...]`
    /// declares the bounding box; the body uses `b` for dead cells, `o` for
    /// live cells, `$` for the end of a row and `!` for the end of the pattern,
    /// each optionally preceded by a repeat count.
    pub fn parse_rle(data: &[u8]) -> Result<Self> {
        let error = |position: usize, reason: &str| LifeError::Pattern {
            position,
            reason: reason.to_string(),
        };

        let mut i = 0;
        // skipping comment and blank lines
        loop {
            while i < data.len() && data[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < data.len() && data[i] == b'#' {
                while i < data.len() && data[i] != b'\n' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        if i == data.len() || data[i] != b'x' {
            return Err(error(i, "expected header line starting with 'x'"));
        }

        let header_end = data[i..]
            .iter()
            .position(|&c| c == b'\n')
            .map_or(data.len(), |p| i + p);
        let header = std::str::from_utf8(&data[i..header_end])
            .map_err(|_| error(i, "header is not valid UTF-8"))?;
        let (mut width, mut height) = (None, None);
        for field in header.split(',') {
            let Some((key, value)) = field.split_once('=') else {
                return Err(error(i, "header field without '='"));
            };
            let parse = |v: &str| {
                v.trim()
                    .parse::<usize>()
                    .map_err(|_| error(i, "header size is not a number"))
            };
            match key.trim() {
                "x" => width = Some(parse(value)?),
                "y" => height = Some(parse(value)?),
                _ => {}
            }
        }
        let (Some(width), Some(height)) = (width, height) else {
            return Err(error(i, "header must declare both x and y"));
        };
        i = header_end;

        // run-length encoded pattern data
        let mut live = vec![];
        let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
        while i < data.len() {
            match data[i] {
                c if c.is_ascii_whitespace() => i += 1,
                b'0'..=b'9' => {
                    let start = i;
                    while i < data.len() && data[i].is_ascii_digit() {
                        i += 1;
                    }
                    let n = std::str::from_utf8(&data[start..i])
                        .ok()
                        .and_then(|s| s.parse::<usize>().ok())
                        .ok_or_else(|| error(start, "repeat count is too large"))?;
                    cnt = Some(n);
                }
                b'o' => {
                    let n = cnt.take().unwrap_or(1);
                    if x.saturating_add(n) > width || y >= height {
                        return Err(error(i, "live cells outside of the declared box"));
                    }
                    live.extend((x..x + n).map(|x| (x, y)));
                    (x, i) = (x + n, i + 1);
                }
                b'b' => {
                    x = x.saturating_add(cnt.take().unwrap_or(1));
                    if x > width {
                        return Err(error(i, "row is longer than declared width"));
                    }
                    i += 1;
                }
                b'$' => {
                    (x, y, i) = (0, y.saturating_add(cnt.take().unwrap_or(1)), i + 1);
                }
                b'!' => {
                    return Self::new(width, height, live);
                }
                _ => return Err(error(i, "unexpected symbol")),
            }
        }
        Err(error(i, "missing terminating '!'"))
    }
}
