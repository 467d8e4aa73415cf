use anyhow::Context;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::fs;
use std::io::{self, Write};
use torrent_json::json::{json_to_torrent, torrent_to_json};
use torrent_json::metainfo::info_hash;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let m = App::new("torrent-json")
        .version("0.1")
        .author("95th")
        .about("Convert torrent files to JSON and back")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("decode")
                .about("Decode a torrent file into JSON")
                .arg(
                    Arg::with_name("torrent")
                        .help("The torrent file path")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("output")
                        .help("Write the JSON here instead of standard output")
                        .short("o")
                        .long("output")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("encode")
                .about("Encode a JSON document back into a torrent file")
                .arg(
                    Arg::with_name("json")
                        .help("The JSON file path")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("torrent")
                        .help("The torrent file to write")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    match m.subcommand() {
        ("decode", Some(m)) => decode(m),
        ("encode", Some(m)) => encode(m),
        _ => unreachable!("a subcommand is required"),
    }
}

fn decode(m: &ArgMatches) -> anyhow::Result<()> {
    let input = m.value_of("torrent").context("missing torrent path")?;
    let buf = fs::read(input).with_context(|| format!("Failed to read {}", input))?;

    let json = torrent_to_json(&buf).with_context(|| format!("Failed to decode {}", input))?;
    debug!("Info hash: {}", info_hash(&buf)?);

    match m.value_of("output") {
        Some(output) => {
            fs::write(output, json + "\n")
                .with_context(|| format!("Failed to write {}", output))?;
            debug!("Wrote JSON to {}", output);
        }
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

fn encode(m: &ArgMatches) -> anyhow::Result<()> {
    let input = m.value_of("json").context("missing JSON path")?;
    let output = m.value_of("torrent").context("missing torrent path")?;

    let text = fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?;
    let buf = json_to_torrent(&text).with_context(|| format!("Failed to encode {}", input))?;

    fs::write(output, &buf).with_context(|| format!("Failed to write {}", output))?;
    debug!("Wrote {} bytes to {}", buf.len(), output);
    Ok(())
}
