use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

const SPEC_PATH: &str = "openapi/api.json";
const HTTP_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

fn main() {
    println!("cargo:rerun-if-changed={SPEC_PATH}");

    let raw = fs::read_to_string(SPEC_PATH).expect("failed to read openapi/api.json");
    let spec: Value = serde_json::from_str(&raw).expect("openapi/api.json is not valid JSON");

    let server_url = spec
        .pointer("/servers/0/url")
        .and_then(Value::as_str)
        .unwrap_or("https://developers.adobe.io");

    let paths = spec
        .get("paths")
        .and_then(Value::as_object)
        .expect("openapi/api.json has no `paths` object");

    let mut generated = String::new();
    writeln!(
        generated,
        "pub(crate) const OPENAPI_DEFAULT_SERVER_URL: &str = {server_url:?};\n"
    )
    .unwrap();
    generated.push_str("pub(crate) static OPENAPI_OPERATIONS: &[OperationDefinition] = &[\n");

    for (path_template, item) in paths {
        let Some(item) = item.as_object() else {
            continue;
        };
        for (method, operation) in item {
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            write_operation(&mut generated, path_template, method, operation);
        }
    }

    generated.push_str("];\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("openapi_operations.rs"), generated)
        .expect("failed to write openapi_operations.rs");
}

fn write_operation(out: &mut String, path_template: &str, method: &str, operation: &Value) {
    let operation_id = operation
        .get("operationId")
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("{} {path_template} has no operationId", method.to_uppercase()));
    let tag = operation
        .pointer("/tags/0")
        .and_then(Value::as_str)
        .unwrap_or("default");

    writeln!(out, "    OperationDefinition {{").unwrap();
    writeln!(out, "        operation_id: {operation_id:?},").unwrap();
    writeln!(out, "        tag: {tag:?},").unwrap();
    writeln!(out, "        method: {:?},", method.to_uppercase()).unwrap();
    writeln!(out, "        path_template: {path_template:?},").unwrap();
    out.push_str("        parameters: &[\n");

    for parameter in operation
        .get("parameters")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        let name = parameter
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("{operation_id} declares a parameter without a name"));
        let location = match parameter.get("in").and_then(Value::as_str) {
            Some("path") => "Path",
            Some("query") => "Query",
            Some("header") => "Header",
            // cookie parameters are not used by the console API
            _ => continue,
        };
        let required = location == "Path"
            || parameter
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false);
        writeln!(
            out,
            "            ParameterDefinition {{ name: {name:?}, location: ParameterLocation::{location}, required: {required} }},"
        )
        .unwrap();
    }

    out.push_str("        ],\n");

    let content = operation.pointer("/requestBody/content");
    let body_kind = match content {
        Some(content) if content.get("multipart/form-data").is_some() => "Multipart",
        Some(_) => "Json",
        None => "None",
    };
    writeln!(out, "        request_body: RequestBodyKind::{body_kind},").unwrap();
    out.push_str("    },\n");
}
