use serde::{Deserialize, Serialize};

use crate::encoding::to_spaced_ascii_string;
use crate::errors::Result;
use crate::event::Numbers;
use crate::sum::Total;

pub const STATUS_OK: u16 = 200;

/// What the host receives back from one invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Fields of the JSON document carried in [`Response::body`], in wire order.
#[derive(Debug, Serialize)]
pub struct ResponseBody<'a> {
    pub message: &'a str,
    pub sum: Total,
    pub processed_numbers: Numbers<'a>,
}

impl Response {
    pub fn ok(body: &ResponseBody<'_>) -> Result<Self> {
        Ok(Self {
            status_code: STATUS_OK,
            body: to_spaced_ascii_string(body)?,
        })
    }
}
