//! GLB Send CLI
//!
//! Development harness: runs the GLTF_Send_HTTP node once from a terminal,
//! for checking a backend without the node-graph host. It reads no config
//! files and no environment variables.

use clap::{Arg, ArgAction, Command};
use glb_http_sender::node::gltf_send::{CLASS_TYPE, DEFAULT_URL};
use glb_http_sender::{registry, GltfSendHttp, Node, NodeInputs, NodeValue, SenderConfig};
use std::collections::BTreeMap;

fn cli() -> Command {
    Command::new("glb_send")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Send a GLB file to an HTTP endpoint")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("send")
                .about("Send a file and print status, response, path and debug info")
                .arg(Arg::new("file").help("Path to the GLB file").required(true))
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .help("Destination URL")
                        .default_value(DEFAULT_URL),
                )
                .arg(
                    Arg::new("method")
                        .short('m')
                        .long("method")
                        .help("HTTP method")
                        .value_parser(["post", "put"])
                        .default_value("post"),
                )
                .arg(
                    Arg::new("header")
                        .short('H')
                        .long("header")
                        .help("Extra request header as name:value (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .help("Request timeout in seconds (default: client default)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("describe").about("Print the node's input and output schema"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    match matches.subcommand() {
        Some(("send", sub_matches)) => {
            let config = match sub_matches.get_one::<u64>("timeout") {
                Some(secs) => SenderConfig::new().timeout_secs(*secs),
                None => SenderConfig::default(),
            };
            config.validate()?;

            let mut headers = BTreeMap::new();
            if let Some(values) = sub_matches.get_many::<String>("header") {
                for raw in values {
                    let (name, value) = raw
                        .split_once(':')
                        .ok_or_else(|| format!("Header must be name:value, got {}", raw))?;
                    headers.insert(name.trim().to_string(), value.trim().to_string());
                }
            }

            let mut inputs = NodeInputs::new();
            if let Some(file) = sub_matches.get_one::<String>("file") {
                inputs.insert("glb_file", file.as_str());
            }
            if let Some(url) = sub_matches.get_one::<String>("url") {
                inputs.insert("url", url.as_str());
            }
            if let Some(method) = sub_matches.get_one::<String>("method") {
                inputs.insert("method_type", method.as_str());
            }
            if !headers.is_empty() {
                inputs.insert("additional_request_headers", headers);
            }

            let node = GltfSendHttp::with_config(config);
            let outputs = node.execute(&inputs);

            for (name, value) in node.return_names().iter().zip(outputs.iter()) {
                match value {
                    NodeValue::Int(i) => println!("{}: {}", name, i),
                    NodeValue::String(s) => println!("{}:\n{}", name, s),
                    NodeValue::Dict(d) => println!("{}: {:?}", name, d),
                }
            }

            let status = outputs.first().and_then(NodeValue::as_int).unwrap_or(0);
            if !(200..300).contains(&status) {
                std::process::exit(1);
            }
        }
        Some(("describe", _)) => {
            let node = registry().create(CLASS_TYPE)?;
            let schema = serde_json::json!({
                "class_type": node.class_type(),
                "display_name": node.display_name(),
                "category": node.category(),
                "function": node.function(),
                "output_node": node.is_output_node(),
                "input": node.input_types(),
                "return_types": node.return_types(),
                "return_names": node.return_names(),
            });
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        _ => {
            eprintln!("No subcommand provided. Use --help for usage information.");
            std::process::exit(1);
        }
    }

    Ok(())
}
