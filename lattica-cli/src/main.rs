//! Lattica stdio front-end
//!
//! Line protocol for UI shells: each request is one JSON object on
//! stdin, each response one JSON object on stdout. Logs go to stderr
//! only, so stdout stays parseable.
//!
//! Request:  {"op": "multiply", "a": "1 2 3\n4 5 6", "b": "7 8\n9 1\n2 3"}
//! Response: {"result": {"text": "...", "matrix": [[...]], "rows": 2, "cols": 2}}
//!       or: {"error": {"message": "...", "hint": "...", "detail": {...}}}

use std::io::{self, BufRead, IsTerminal, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use lattica::{Error, Lattica, Operation, Outcome};

const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One user action forwarded by the shell
#[derive(Debug, Deserialize)]
struct Request {
    op: String,
    a: String,
    #[serde(default)]
    b: Option<String>,
}

#[derive(Debug, Serialize)]
struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ResultPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorPayload>,
}

#[derive(Debug, Serialize)]
struct ResultPayload {
    /// Rendered display text
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scalar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cols: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    message: String,
    hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<JsonValue>,
}

impl Response {
    fn success(payload: ResultPayload) -> Self {
        Self {
            result: Some(payload),
            error: None,
        }
    }

    fn failure(message: String, hint: String, detail: Option<JsonValue>) -> Self {
        Self {
            result: None,
            error: Some(ErrorPayload {
                message,
                hint,
                detail,
            }),
        }
    }
}

fn outcome_payload(engine: &Lattica, outcome: &Outcome) -> ResultPayload {
    let text = engine.renderer().render(outcome);
    match outcome {
        Outcome::Matrix(m) => ResultPayload {
            text,
            matrix: Some(m.to_rows()),
            scalar: None,
            rows: Some(m.rows()),
            cols: Some(m.cols()),
        },
        Outcome::Scalar(x) => ResultPayload {
            text,
            matrix: None,
            scalar: Some(*x),
            rows: None,
            cols: None,
        },
    }
}

fn error_response(err: &Error) -> Response {
    Response::failure(
        err.to_string(),
        err.hint().to_string(),
        serde_json::to_value(err).ok(),
    )
}

fn valid_op_names() -> String {
    Operation::ALL
        .iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Handle one decoded request
fn handle_request(engine: &Lattica, request: &Request) -> Response {
    let op = match Operation::from_name(&request.op) {
        Some(op) => op,
        None => {
            return Response::failure(
                format!("unknown operation '{}'", request.op),
                format!("Valid operations: {}.", valid_op_names()),
                None,
            );
        }
    };

    debug!(op = %op, "dispatching");

    match engine.evaluate(op, &request.a, request.b.as_deref()) {
        Ok(outcome) => Response::success(outcome_payload(engine, &outcome)),
        Err(err) => {
            warn!(op = %op, error = %err, "operation failed");
            error_response(&err)
        }
    }
}

fn write_response(response: &Response) {
    let mut stdout = io::stdout().lock();
    match serde_json::to_string(response) {
        Ok(json) => {
            let _ = writeln!(stdout, "{}", json);
            let _ = stdout.flush();
        }
        Err(e) => warn!(error = %e, "failed to encode response"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let engine = Lattica::new();

    info!("Lattica v{} started", TOOL_VERSION);

    if io::stdin().is_terminal() {
        eprintln!("Enter one JSON request per line, e.g.:");
        eprintln!(r#"  {{"op": "multiply", "a": "1 2 3\n4 5 6", "b": "7 8\n9 1\n2 3"}}"#);
        eprintln!("Operations: {}", valid_op_names());
    }

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("shell disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let response = match serde_json::from_str::<Request>(line) {
                    Ok(request) => handle_request(&engine, &request),
                    Err(e) => {
                        warn!(error = %e, "malformed request");
                        Response::failure(
                            format!("malformed request: {}", e),
                            "Send one JSON object per line.".to_string(),
                            None,
                        )
                    }
                };

                write_response(&response);
            }
            Err(e) => {
                warn!(error = %e, "failed to read stdin");
                break;
            }
        }
    }
}
