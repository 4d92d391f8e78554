//! The client→server query frame: `[type, term, global optargs]`.
//!
//! This is the boundary artifact handed to the transport. Length-prefix
//! framing, the socket, and response decoding live outside this crate.

use serde_json::{json, Value as JsonValue};
use serde_repr::{Deserialize_repr, Serialize_repr};
use tracing::debug;

use crate::encode;
use crate::error::{ReqlError, Result};
use crate::term::{Arg, OptArgs, Term};

/// The kind of query frame being sent.
#[derive(Serialize_repr, Deserialize_repr, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum QueryType {
    Start = 1,
    Continue = 2,
    Stop = 3,
    NoreplyWait = 4,
    ServerInfo = 5,
}

/// One query frame. `Start` frames carry a term tree and the global
/// options (`db`, `durability`, `noreply`, …); the cursor control frames
/// are bare.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMessage {
    query_type: QueryType,
    term: Option<Term>,
    global_opt_args: OptArgs,
}

impl QueryMessage {
    pub fn start(term: Term) -> Self {
        QueryMessage {
            query_type: QueryType::Start,
            term: Some(term),
            global_opt_args: OptArgs::new(),
        }
    }

    pub fn continue_() -> Self {
        QueryMessage::control(QueryType::Continue)
    }

    pub fn stop() -> Self {
        QueryMessage::control(QueryType::Stop)
    }

    pub fn noreply_wait() -> Self {
        QueryMessage::control(QueryType::NoreplyWait)
    }

    pub fn server_info() -> Self {
        QueryMessage::control(QueryType::ServerInfo)
    }

    fn control(query_type: QueryType) -> Self {
        QueryMessage {
            query_type,
            term: None,
            global_opt_args: OptArgs::new(),
        }
    }

    /// Attach a global option to the frame. A term is a valid value: the
    /// `db` option is a DB term on the wire.
    pub fn with_global_opt(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.global_opt_args.insert(key, value);
        self
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    pub fn term(&self) -> Option<&Term> {
        self.term.as_ref()
    }

    pub fn global_opt_args(&self) -> &OptArgs {
        &self.global_opt_args
    }

    /// Encode the frame. `Start` frames are always three elements, with
    /// `{}` for no global options; control frames are `[type]`.
    pub fn encode(&self) -> Result<JsonValue> {
        debug!(query_type = ?self.query_type, "encoding query frame");
        match &self.term {
            Some(term) => Ok(json!([
                self.query_type as u32,
                encode::to_wire(term)?,
                encode::encode_opt_args(&self.global_opt_args)?,
            ])),
            None => Ok(json!([self.query_type as u32])),
        }
    }

    /// The frame as bytes, ready for length-prefix framing.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let value = self.encode()?;
        serde_json::to_vec(&value).map_err(|e| ReqlError::UnencodableValue(e.to_string()))
    }
}
