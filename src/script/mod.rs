//! Line-oriented drawing command scripts.
//!
//! One command per line, tokens separated by whitespace. Blank lines and
//! lines starting with `#` are ignored.
//!
//! ```text
//! resetCanvas 400 300
//! setColor 255 0 0
//! drawLine l1 10 10 390 290 Bresenham
//! drawPolygon p1 50 50 150 50 100 120 DDA
//! drawEllipse e1 200 100 300 160
//! drawCurve c1 20 280 120 150 220 280 Bezier
//! rotate p1 100 80 30
//! scale e1 250 130 0.5
//! clip l1 0 0 200 200 Liang-Barsky
//! saveCanvas frame
//! ```
//!
//! # Example
//!
//! ```no_run
//! use trueno_raster::script::Interpreter;
//!
//! let mut interp = Interpreter::new("out");
//! interp.run("resetCanvas 64 64\ndrawEllipse e 8 8 56 40\nsaveCanvas ellipse\n")?;
//! # Ok::<(), trueno_raster::Error>(())
//! ```

mod command;
mod interpreter;

pub use command::{parse_command, Command};
pub use interpreter::Interpreter;
