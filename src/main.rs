//! bookmarkd server — JSON-RPC over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.create", "params":{"name":"...","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use bookmarkd::app::App;
use bookmarkd::rpc_handler::handle_method;

use serde_json::{json, Value};

fn main() {
    // Absolute path for the DB — prefer BOOKMARKD_DATA_DIR, fallback to exe directory
    let db_path = if let Ok(dir) = std::env::var("BOOKMARKD_DATA_DIR") {
        std::path::PathBuf::from(dir).join("bookmarkd.db")
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent().unwrap_or(std::path::Path::new(".")).join("bookmarkd.db")
    } else {
        std::path::PathBuf::from("bookmarkd.db")
    };
    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("bookmarkd.db")).expect("Failed to initialize bookmarkd"),
    );

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        eprintln!("[RPC] {}", method);
        let result = handle_method(&app, method, &params);

        let response = match result {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
