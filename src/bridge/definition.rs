// In: src/bridge/definition.rs

//! The function registry: every callable this plugin exposes, with its name,
//! ordered parameter list, and declared return type. Hosts negotiate this
//! metadata up front (serialized as JSON) and later invoke by name, so the
//! order and spelling here are part of the wire contract.

use serde::Serialize;

/// The declared type of a function's return value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    String,
    Bool,
}

/// One declared parameter. All parameters in this crate are strings; the
/// host guarantees the value is already a string before dispatch.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParameterDef {
    pub name: &'static str,
    pub param_type: &'static str,
    pub description: &'static str,
}

/// The full declaration of one exposed function.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParameterDef>,
    pub return_type: ReturnType,
}

/// A successfully computed result, typed per the declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnValue {
    Text(String),
    Bool(bool),
}

/// Returns the registry of every function this plugin exposes, in the order
/// they are advertised to the host.
pub fn definitions() -> Vec<FunctionDef> {
    vec![
        FunctionDef {
            name: "base64gunzip",
            summary: "Base64gunzip function",
            description: "Decompresses a base64-encoded gzip string",
            parameters: vec![ParameterDef {
                name: "str",
                param_type: "string",
                description: "The base64-encoded gzip string to decompress and decode",
            }],
            return_type: ReturnType::String,
        },
        FunctionDef {
            name: "cidrcontains",
            summary: "CIDRContains function",
            description: "Determines if a CIDR prefix contains a given IP address",
            parameters: vec![
                ParameterDef {
                    name: "prefix",
                    param_type: "string",
                    description: "The CIDR prefix to check",
                },
                ParameterDef {
                    name: "address",
                    param_type: "string",
                    description: "The IP address to check",
                },
            ],
            return_type: ReturnType::Bool,
        },
        FunctionDef {
            name: "urldecode",
            summary: "URLDecode function",
            description: "Decodes a URL-encoded string",
            parameters: vec![ParameterDef {
                name: "input",
                param_type: "string",
                description: "The URL-encoded string to decode",
            }],
            return_type: ReturnType::String,
        },
    ]
}
