use std::error::Error;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use crate::core::data::render_config::{RenderConfig, RenderConfigError, RenderParams};

/// 8192 × 8192.
pub const DEFAULT_MAX_PIXELS: usize = 67_108_864;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_pixels: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    PositionArity { value: String },
    InvalidFloat { value: String, source: ParseFloatError },
    InvalidInteger { name: &'static str, value: String, source: ParseIntError },
    Config(RenderConfigError),
    TooManyPixels { pixels: usize, limit: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionArity { value } => {
                write!(f, "invalid position string: {}", value)
            }
            Self::InvalidFloat { value, source } => {
                write!(f, "invalid position component {:?}: {}", value, source)
            }
            Self::InvalidInteger { name, value, source } => {
                write!(f, "invalid {} {:?}: {}", name, value, source)
            }
            Self::Config(err) => write!(f, "{}", err),
            Self::TooManyPixels { pixels, limit } => {
                write!(f, "image of {} pixels exceeds the limit of {}", pixels, limit)
            }
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFloat { source, .. } => Some(source),
            Self::InvalidInteger { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderConfigError> for QueryError {
    fn from(err: RenderConfigError) -> Self {
        Self::Config(err)
    }
}

/// First value given for `name`. An empty value counts as absent.
fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

fn parse_float(value: &str) -> Result<f64, QueryError> {
    value.parse().map_err(|source| QueryError::InvalidFloat {
        value: value.to_string(),
        source,
    })
}

fn parse_integer(name: &'static str, value: &str) -> Result<i32, QueryError> {
    value.parse().map_err(|source| QueryError::InvalidInteger {
        name,
        value: value.to_string(),
        source,
    })
}

/// `xmin,ymin,xmax,ymax`
fn parse_position(value: &str, params: &mut RenderParams) -> Result<(), QueryError> {
    let parts: Vec<&str> = value.split(',').collect();
    let [xmin, ymin, xmax, ymax] = parts.as_slice() else {
        return Err(QueryError::PositionArity {
            value: value.to_string(),
        });
    };

    params.xmin = parse_float(xmin)?;
    params.ymin = parse_float(ymin)?;
    params.xmax = parse_float(xmax)?;
    params.ymax = parse_float(ymax)?;

    Ok(())
}

/// Reads `pos`, `width`, `height` and `workers`; anything missing keeps its
/// default. Other parameters are ignored.
pub fn parse_render_params(pairs: &[(String, String)]) -> Result<RenderParams, QueryError> {
    let mut params = RenderParams::default();

    if let Some(pos) = first_value(pairs, "pos") {
        parse_position(pos, &mut params)?;
    }
    if let Some(width) = first_value(pairs, "width") {
        params.width = parse_integer("width", width)?;
    }
    if let Some(height) = first_value(pairs, "height") {
        params.height = parse_integer("height", height)?;
    }
    if let Some(workers) = first_value(pairs, "workers") {
        params.workers = parse_integer("workers", workers)?;
    }

    Ok(params)
}

pub fn parse_render_config(
    pairs: &[(String, String)],
    limits: RequestLimits,
) -> Result<RenderConfig, QueryError> {
    let config = RenderConfig::try_from(parse_render_params(pairs)?)?;

    let pixels = config.size().pixel_count();
    if pixels > limits.max_pixels {
        return Err(QueryError::TooManyPixels {
            pixels,
            limit: limits.max_pixels,
        });
    }

    Ok(config)
}
