//! Command line parsing.

use std::fmt::Display;
use std::str::FromStr;

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm, PolygonAlgorithm};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::scene::Shape;
use crate::transform::Transform;

/// A single parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `resetCanvas W H`
    ResetCanvas {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// `saveCanvas NAME`
    SaveCanvas {
        /// File stem; `.png` is appended.
        name: String,
    },
    /// `setColor R G B`
    SetColor(Rgba),
    /// `drawLine`, `drawPolygon`, `drawEllipse` and `drawCurve`.
    Draw {
        /// Primitive identifier.
        id: String,
        /// Geometry to store.
        shape: Shape,
    },
    /// `translate`, `rotate` and `scale`.
    Transform {
        /// Primitive identifier.
        id: String,
        /// Edit to apply.
        transform: Transform,
    },
    /// `clip ID x0 y0 x1 y1 ALG`
    Clip {
        /// Primitive identifier.
        id: String,
        /// Clip window.
        window: Rect,
        /// `None` when the name was not recognised.
        algorithm: Option<ClipAlgorithm>,
    },
}

/// Parse one script line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. `line` is the
/// 1-based line number used in error reports.
///
/// # Example
///
/// ```
/// use trueno_raster::script::{parse_command, Command};
///
/// let cmd = parse_command(1, "resetCanvas 100 80").unwrap();
/// assert_eq!(cmd, Some(Command::ResetCanvas { width: 100, height: 80 }));
/// assert_eq!(parse_command(2, "  # comment").unwrap(), None);
/// ```
pub fn parse_command(line: usize, text: &str) -> Result<Option<Command>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = Tokens::new(line, text);
    let name = tokens.word("command")?;

    let command = match name {
        "resetCanvas" => Command::ResetCanvas {
            width: tokens.number("width")?,
            height: tokens.number("height")?,
        },
        "saveCanvas" => Command::SaveCanvas {
            name: tokens.word("file name")?.to_string(),
        },
        "setColor" => Command::SetColor(Rgba::rgb(
            tokens.number("red")?,
            tokens.number("green")?,
            tokens.number("blue")?,
        )),
        "drawLine" => {
            let id = tokens.word("identifier")?.to_string();
            let points = vec![tokens.point()?, tokens.point()?];
            let algorithm = selector::<LineAlgorithm>(line, tokens.word("algorithm")?);
            Command::Draw {
                id,
                shape: Shape::Line { points, algorithm },
            }
        }
        "drawPolygon" => {
            let id = tokens.word("identifier")?.to_string();
            let (points, name) = tokens.point_list()?;
            Command::Draw {
                id,
                shape: Shape::Polygon {
                    points,
                    algorithm: selector::<PolygonAlgorithm>(line, name),
                },
            }
        }
        "drawEllipse" => {
            let id = tokens.word("identifier")?.to_string();
            let points = vec![tokens.point()?, tokens.point()?];
            Command::Draw {
                id,
                shape: Shape::Ellipse { points },
            }
        }
        "drawCurve" => {
            let id = tokens.word("identifier")?.to_string();
            let (points, name) = tokens.point_list()?;
            Command::Draw {
                id,
                shape: Shape::Curve {
                    points,
                    algorithm: selector::<CurveAlgorithm>(line, name),
                },
            }
        }
        "translate" => Command::Transform {
            id: tokens.word("identifier")?.to_string(),
            transform: Transform::Translate {
                dx: tokens.number("dx")?,
                dy: tokens.number("dy")?,
            },
        },
        "rotate" => Command::Transform {
            id: tokens.word("identifier")?.to_string(),
            transform: Transform::Rotate {
                center: tokens.point()?,
                degrees: tokens.real("angle")?,
            },
        },
        "scale" => Command::Transform {
            id: tokens.word("identifier")?.to_string(),
            transform: Transform::Scale {
                center: tokens.point()?,
                factor: tokens.real("factor")?,
            },
        },
        "clip" => {
            let id = tokens.word("identifier")?.to_string();
            let window = Rect::from_corners(tokens.point()?, tokens.point()?);
            let algorithm = selector::<ClipAlgorithm>(line, tokens.word("algorithm")?);
            Command::Clip {
                id,
                window,
                algorithm,
            }
        }
        other => return Err(tokens.error(format!("unknown command '{other}'"))),
    };

    tokens.finish()?;
    Ok(Some(command))
}

/// Look up an algorithm by name, logging names nothing recognises.
fn selector<A>(line: usize, name: &str) -> Option<A>
where
    A: FromStr<Err = Error>,
{
    match name.parse() {
        Ok(algorithm) => Some(algorithm),
        Err(e) => {
            log::warn!("line {line}: {e}; primitive will not be drawn");
            None
        }
    }
}

/// Whitespace-separated tokens of one command line.
struct Tokens<'a> {
    line: usize,
    rest: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            rest: text.split_whitespace(),
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.rest
            .next()
            .ok_or_else(|| self.error(format!("missing {what}")))
    }

    fn parse<T>(&self, token: &str, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        token
            .parse()
            .map_err(|e| self.error(format!("invalid {what} '{token}': {e}")))
    }

    fn number<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.word(what)?;
        self.parse(token, what)
    }

    fn real(&mut self, what: &str) -> Result<f64> {
        let value: f64 = self.number(what)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.error(format!("{what} must be finite")))
        }
    }

    fn point(&mut self) -> Result<Point> {
        let x: i32 = self.number("x coordinate")?;
        let y: i32 = self.number("y coordinate")?;
        Ok(Point::from((x, y)))
    }

    /// Coordinate pairs followed by a trailing algorithm name.
    fn point_list(&mut self) -> Result<(Vec<Point>, &'a str)> {
        let mut tokens: Vec<&'a str> = self.rest.by_ref().collect();
        let name = tokens
            .pop()
            .ok_or_else(|| self.error("missing algorithm"))?;
        if name.parse::<i32>().is_ok() {
            return Err(self.error(format!("missing algorithm after coordinate '{name}'")));
        }
        if tokens.is_empty() {
            return Err(self.error("missing coordinates"));
        }
        if tokens.len() % 2 != 0 {
            return Err(self.error(format!("odd number of coordinates ({})", tokens.len())));
        }

        let points = tokens
            .chunks_exact(2)
            .map(|pair| {
                let x: i32 = self.parse(pair[0], "x coordinate")?;
                let y: i32 = self.parse(pair[1], "y coordinate")?;
                Ok(Point::from((x, y)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((points, name))
    }

    fn finish(&mut self) -> Result<()> {
        match self.rest.next() {
            None => Ok(()),
            Some(extra) => Err(self.error(format!("unexpected token '{extra}'"))),
        }
    }
}
